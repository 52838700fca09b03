/// Category of a catalog entry, as named by its type's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppType {
    Game,
    Application,
    Tool,
    Config,
    LegacyMedia,
    Video,
    Guide,
    Hardware,
    Other(String),
}

impl AppType {
    pub fn from_display_name(name: &str) -> Self {
        match name {
            "Game" => AppType::Game,
            "Application" => AppType::Application,
            "Tool" => AppType::Tool,
            "Config" => AppType::Config,
            "Legacy Media" => AppType::LegacyMedia,
            "Video" => AppType::Video,
            "Guide" => AppType::Guide,
            "Hardware" => AppType::Hardware,
            other => AppType::Other(other.to_owned()),
        }
    }

    /// What people are doing with it, for "People <verb> X right now".
    pub fn verb(&self) -> &'static str {
        match self {
            AppType::Tool | AppType::Config | AppType::Application => "using",
            AppType::LegacyMedia | AppType::Video => "watching",
            AppType::Guide => "reading",
            AppType::Hardware => "bricking",
            AppType::Game | AppType::Other(_) => "playing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_follow_category() {
        let cases = [
            ("Game", "playing"),
            ("Tool", "using"),
            ("Config", "using"),
            ("Application", "using"),
            ("Legacy Media", "watching"),
            ("Video", "watching"),
            ("Guide", "reading"),
            ("Hardware", "bricking"),
            ("DLC", "playing"),
            ("", "playing"),
        ];
        for &(display_name, verb) in cases.iter() {
            assert_eq!(AppType::from_display_name(display_name).verb(), verb);
        }
    }
}
