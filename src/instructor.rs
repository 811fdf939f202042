// src/instructor.rs

use serde::{Deserialize, Serialize};
//
use crate::resource::Resource;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Instructor {
    pub name: String,
    pub specialty: String,
}

impl Instructor {
    pub fn new(name: &str, specialty: &str) -> Self {
        Self { name: name.to_string(), specialty: specialty.to_string() }
    }
}

impl Resource for Instructor {
    const COLLECTION: &'static str = "trainers";
    const KEY: &'static str = "trainer";
    const CREATED: &'static str = "Entrenador creado correctamente";
    const DELETED: &'static str = "Entrenador eliminado correctamente";

    fn samples() -> Vec<Self> {
        vec![
            Instructor::new("Roberto", "CrossFit"),
            Instructor::new("Arnold", "Yoga"),
            Instructor::new("Lucas", "Pilates"),
        ]
    }
}
