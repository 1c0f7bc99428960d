//! Demo rows for a fresh database. Rows whose natural key already exists are
//! skipped, so running it on every start is harmless.

use crate::config::DEFAULT_COURSE;
use crate::error::AppError;
use crate::service::{
    EventService, ExtensionFields, ExtensionProjectService, NewEvent, NewProfessor, NewUser,
    ProfessorService, ResearchFields, ResearchProjectService, SubjectService, UserService,
};
use sqlx::{AnyConnection, AnyPool};

const USERS: &[(&str, &str, &str, &str, &str)] = &[
    ("Admin", "admin@example.com", "admin123", "Coordenador", DEFAULT_COURSE),
    ("Professor Teste", "professor@example.com", "professor123", "Professor", DEFAULT_COURSE),
    ("Aluno Teste", "aluno@example.com", "aluno123", "Aluno", DEFAULT_COURSE),
    ("Prof. Maria Nutrição", "maria.nutricao@pucminas.br", "senha123", "Professor", "Nutrição"),
    ("Prof. João SI", "joao.si@pucminas.br", "senha123", "Professor", "Sistemas de Informação"),
];

const PROFESSORS: &[(&str, &str, &str)] = &[
    ("Prof. Ana Silva", "ana.silva@pucminas.br", DEFAULT_COURSE),
    ("Prof. Carlos Oliveira", "carlos.oliveira@pucminas.br", DEFAULT_COURSE),
    ("Prof. Júlia Costa", "julia.costa@pucminas.br", DEFAULT_COURSE),
    ("Prof. Marcos Santos", "marcos.santos@pucminas.br", DEFAULT_COURSE),
    ("Prof. Marina Rocha", "marina.rocha@pucminas.br", "Nutrição"),
    ("Prof. Rafael Costa", "rafael.costa@pucminas.br", "Nutrição"),
    ("Prof. Patricia Lima", "patricia.lima@pucminas.br", "Sistemas de Informação"),
    ("Prof. Leonardo Alves", "leonardo.alves@pucminas.br", "Sistemas de Informação"),
];

const PROFESSOR_PASSWORD: &str = "senha123";

/// (professor email, coordination kind) linked to the demo subject.
const SUBJECT_LINKS: &[(&str, &str)] = &[
    ("ana.silva@pucminas.br", "pesquisa"),
    ("ana.silva@pucminas.br", "extensao"),
    ("carlos.oliveira@pucminas.br", "pesquisa"),
    ("julia.costa@pucminas.br", "extensao"),
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

impl SeedReport {
    fn count(&mut self, inserted: bool) {
        if inserted {
            self.inserted += 1;
        } else {
            self.skipped += 1;
        }
    }
}

async fn exists_by(conn: &mut AnyConnection, table: &str, column: &str, value: &str) -> Result<bool, AppError> {
    let sql = format!("SELECT id FROM {} WHERE {} = $1", table, column);
    let found: Option<i64> = sqlx::query_scalar(&sql)
        .bind(value)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some())
}

pub async fn seed_demo_data(pool: &AnyPool) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    for &(name, email, password, role, course) in USERS {
        let insert = !UserService::email_taken(&mut tx, email).await?;
        if insert {
            let user = NewUser {
                name,
                email,
                password,
                role,
                course: Some(course),
            };
            UserService::insert(&mut tx, &user).await?;
        }
        report.count(insert);
    }

    for &(name, email, course) in PROFESSORS {
        let insert = ProfessorService::id_by_email(&mut tx, email).await?.is_none();
        if insert {
            let professor = NewProfessor {
                name,
                email,
                password: PROFESSOR_PASSWORD,
                course,
            };
            ProfessorService::insert(&mut tx, &professor).await?;
        }
        report.count(insert);
    }

    let subject_id = match SubjectService::id_by_name(&mut tx, DEFAULT_COURSE).await? {
        Some(id) => {
            report.count(false);
            id
        }
        None => {
            report.count(true);
            SubjectService::insert(
                &mut tx,
                DEFAULT_COURSE,
                Some("Programa de análise e desenvolvimento de sistemas computacionais"),
            )
            .await?
        }
    };
    for &(email, coordination) in SUBJECT_LINKS {
        let Some(professor_id) = ProfessorService::id_by_email(&mut tx, email).await? else {
            continue;
        };
        let insert = SubjectService::existing_link(&mut tx, subject_id, professor_id, coordination)
            .await?
            .is_none();
        if insert {
            SubjectService::insert_link(&mut tx, subject_id, professor_id, coordination).await?;
        }
        report.count(insert);
    }

    let ana = ProfessorService::id_by_email(&mut tx, "ana.silva@pucminas.br").await?;
    let carlos = ProfessorService::id_by_email(&mut tx, "carlos.oliveira@pucminas.br").await?;
    let julia = ProfessorService::id_by_email(&mut tx, "julia.costa@pucminas.br").await?;

    let research = [
        ResearchFields {
            title: Some("Análise de Padrões de Segurança em Aplicações Web"),
            theme: Some("Segurança da Informação"),
            description: Some("Pesquisa sobre vulnerabilidades e padrões de segurança em aplicações web modernas"),
            occurs_at: Some("2025-03-15T00:00:00.000Z"),
            research_problem: Some("Quais são os padrões de vulnerabilidade mais comuns em aplicações web?"),
            methodology: Some("Análise de código-fonte, testes de penetração e revisão de literatura"),
            expected_results: Some("Documentação de vulnerabilidades comuns e recomendações de segurança"),
            image: None,
            coordinator_id: ana,
        },
        ResearchFields {
            title: Some("Otimização de Algoritmos em Computação em Nuvem"),
            theme: Some("Computação em Nuvem"),
            description: Some("Estudo sobre otimização de recursos em ambientes de nuvem"),
            occurs_at: Some("2025-04-20T00:00:00.000Z"),
            research_problem: Some("Como otimizar a distribuição de recursos em computação em nuvem?"),
            methodology: Some("Simulação computacional e análise de dados"),
            expected_results: Some("Algoritmos otimizados e métricas de desempenho"),
            image: None,
            coordinator_id: carlos,
        },
    ];
    for fields in &research {
        let title = fields.title.unwrap_or_default();
        let insert = fields.coordinator_id.is_some()
            && !exists_by(&mut tx, "research_projects", "title", title).await?;
        if insert {
            ResearchProjectService::insert(&mut tx, fields).await?;
        }
        report.count(insert);
    }

    let extension = [
        ExtensionFields {
            title: Some("Workshop: Desenvolvimento Mobile para Iniciantes"),
            theme: Some("Desenvolvimento Mobile"),
            description: Some("Workshop prático de desenvolvimento de aplicações mobile para a comunidade local"),
            occurs_at: Some("2025-03-15T00:00:00.000Z"),
            target_audience: Some("Estudantes de programação e desenvolvedores iniciantes"),
            community: Some("Comunidade de tecnologia local da região de Belo Horizonte"),
            image: None,
            coordinator_id: ana,
        },
        ExtensionFields {
            title: Some("Programa de Mentoria em Desenvolvimento Full Stack"),
            theme: Some("Desenvolvimento Full Stack"),
            description: Some("Programa de mentoria oferecido para a comunidade externa em desenvolvimento full stack"),
            occurs_at: Some("2025-04-01T00:00:00.000Z"),
            target_audience: Some("Profissionais em transição de carreira e autodidatas"),
            community: Some("Agências de desenvolvimento local e startups"),
            image: None,
            coordinator_id: julia,
        },
    ];
    for fields in &extension {
        let title = fields.title.unwrap_or_default();
        let insert = fields.coordinator_id.is_some()
            && !exists_by(&mut tx, "extension_projects", "title", title).await?;
        if insert {
            ExtensionProjectService::insert(&mut tx, fields).await?;
        }
        report.count(insert);
    }

    let event = NewEvent {
        title: "Workshop de Segurança Web",
        date: "2025-03-15T14:00:00.000Z",
        responsible: "Prof. Ana Silva",
        status: "Confirmado",
        location: Some("Sala 101 - PUC Minas"),
        course: DEFAULT_COURSE,
        event_type: "Workshop",
        modality: "Presencial",
        description: Some("Workshop prático sobre segurança em aplicações web"),
        image: None,
        document: None,
        link: None,
    };
    let insert = !exists_by(&mut tx, "events", "title", event.title).await?;
    if insert {
        EventService::insert(&mut tx, &event).await?;
    }
    report.count(insert);

    tx.commit().await?;
    tracing::info!(inserted = report.inserted, skipped = report.skipped, "demo data seeded");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect, ensure_tables, Backend};

    #[tokio::test]
    async fn seeding_twice_inserts_nothing_new() {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_tables(&pool, Backend::Sqlite).await.unwrap();

        let first = seed_demo_data(&pool).await.unwrap();
        assert!(first.inserted > 0);
        assert_eq!(first.skipped, 0);

        let second = seed_demo_data(&pool).await.unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, first.inserted);

        let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subject_professors")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(links, SUBJECT_LINKS.len() as i64);
    }
}
