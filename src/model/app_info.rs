use crate::model::enums::AppType;

#[derive(Debug, Clone, PartialEq)]
pub struct AppInfo {
    pub name: String,
    pub app_type: AppType,
}
