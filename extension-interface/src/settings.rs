use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingType {
    Boolean,
    String,
    Number,
}

/// Setting key -> the control the host should render for it.
pub type SettingTypes = HashMap<String, SettingType>;

/// Setting key -> stored value.
pub type Settings = HashMap<String, serde_json::Value>;
