use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub nome: String,
    pub email: String,
    pub role: String,
    pub push_enabled: bool,
}
