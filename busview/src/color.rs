use busview_core::{Role, Style};
use colored::Colorize;

/// ANSI colors for terminal output.
///
/// `colored` honors `NO_COLOR` and `CLICOLOR_FORCE` on top of this.
#[derive(Debug, Default, Clone, Copy)]
pub struct Colors;

impl Style for Colors {
    fn paint(&self, text: &str, role: Role) -> String {
        let text = match role {
            Role::Path | Role::BusName => text.bold(),
            Role::Interface => text.green(),
            Role::Section => text.yellow(),
            Role::Annotation => text.magenta(),
            Role::ArgName | Role::Access | Role::Cmdline => text.bright_black(),
            Role::Type | Role::Pid => text.blue(),
            Role::Error => text.red(),
        };

        text.to_string()
    }
}
