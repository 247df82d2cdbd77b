use clap::Subcommand;
use focuslog_core::{Database, Preferences, Theme};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print current preferences as JSON
    Show,
    /// Get or set the theme (dark | light)
    Theme {
        value: Option<String>,
    },
    /// Get or set clock-only mode
    ClockOnly {
        value: Option<bool>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let prefs = Preferences::new(&db);

    match action {
        ConfigAction::Show => {
            let report = serde_json::json!({
                "theme": prefs.theme().as_str(),
                "clock_only_mode": prefs.clock_only_mode(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ConfigAction::Theme { value } => match value {
            Some(value) => {
                let theme = match value.as_str() {
                    "dark" => Theme::Dark,
                    "light" => Theme::Light,
                    other => return Err(format!("unknown theme '{other}' (dark | light)").into()),
                };
                prefs.set_theme(theme)?;
                println!("{}", theme.as_str());
            }
            None => println!("{}", prefs.theme().as_str()),
        },
        ConfigAction::ClockOnly { value } => match value {
            Some(enabled) => {
                prefs.set_clock_only_mode(enabled)?;
                println!("{enabled}");
            }
            None => println!("{}", prefs.clock_only_mode()),
        },
    }

    Ok(())
}
