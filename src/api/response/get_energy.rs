use serde::Deserialize;
use serde_json::Number;

#[derive(Deserialize)]
pub struct Value {
    pub date: String,
    #[serde(default)]
    pub value: Option<Number>,
}

#[derive(Deserialize)]
pub struct Data {
    pub unit: String,
    pub values: Vec<Value>,
}

#[derive(Deserialize)]
pub struct GetEnergy {
    pub energy: Data,
}
