// src/member.rs

use serde::{Deserialize, Serialize};
//
use crate::resource::Resource;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Member {
    pub name: String,
    pub email: String,
}

impl Member {
    pub fn new(name: &str, email: &str) -> Self {
        Self { name: name.to_string(), email: email.to_string() }
    }
}

impl Resource for Member {
    const COLLECTION: &'static str = "users";
    const KEY: &'static str = "user";
    const CREATED: &'static str = "Usuario creado correctamente";
    const DELETED: &'static str = "Usuario eliminado correctamente";

    fn samples() -> Vec<Self> {
        vec![
            Member::new("Pepito perez", "usuario1@example.com"),
            Member::new("Juan alarcon ", "usuario2@example.com"),
            Member::new("Mario alzola ", "usuario3@example.com"),
        ]
    }
}
