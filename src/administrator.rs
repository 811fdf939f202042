// src/administrator.rs

use serde::{Deserialize, Serialize};
//
use crate::resource::Resource;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Administrator {
    pub name: String,
    pub role: String,
}

impl Administrator {
    pub fn new(name: &str, role: &str) -> Self {
        Self { name: name.to_string(), role: role.to_string() }
    }
}

impl Resource for Administrator {
    const COLLECTION: &'static str = "admins";
    const KEY: &'static str = "admin";
    const CREATED: &'static str = "Administrador creado correctamente";
    const DELETED: &'static str = "Administrador eliminado correctamente";

    fn samples() -> Vec<Self> {
        vec![
            Administrator::new("Juaquin", "Admin"),
            Administrator::new("Jose", "Supervisor"),
            Administrator::new("Argemiro", "Manager"),
        ]
    }
}
