//! Course catalogue offered by the front end's course selector.

use crate::config::DEFAULT_COURSE;

pub const COURSES: &[&str] = &[
    DEFAULT_COURSE,
    "Nutrição",
    "Sistemas de Informação",
    "Administração",
    "Engenharia Civil",
    "Psicologia",
    "Ciências Contábeis",
    "Direito",
    "Engenharia de Produção",
];
