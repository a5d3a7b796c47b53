/// `version` command: print build metadata under a decorative banner.
use std::io::Write;

use comfy_table::{Table, presets::NOTHING};

use crate::cli::args::VersionArgs;
use crate::errors::CliError;
use crate::types::VersionInfo;

const DESCRIPTION: &str = "ML model signing and verification.";

/// "model-signing" in the figlet `starwars` font.
const STARWARS_BANNER: &str = r"
.___  ___.   ______    _______   _______  __               _______. __    _______ .__   __.  __  .__   __.   _______
|   \/   |  /  __  \  |       \ |   ____||  |             /       ||  |  /  _____||  \ |  | |  | |  \ |  |  /  _____|
|  \  /  | |  |  |  | |  .--.  ||  |__   |  |     ______ |   (----`|  | |  |  __  |   \|  | |  | |   \|  | |  |  __
|  |\/|  | |  |  |  | |  |  |  ||   __|  |  |    |______| \   \    |  | |  | |_ | |  . `  | |  | |  . `  | |  | |_ |
|  |  |  | |  `--'  | |  '--'  ||  |____ |  `----.    .----)   |   |  | |  |__| | |  |\   | |  | |  |\   | |  |__| |
|__|  |__|  \______/  |_______/ |_______||_______|    |_______/    |__|  \______| |__| \__| |__| |__| \__|  \______|
";

/// Banner style for the `version` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerFont {
    /// Large ASCII-art lettering.
    #[default]
    StarWars,
    /// The program name on a single line.
    Plain,
}

impl BannerFont {
    /// The rendered banner for `model-signing`.
    #[must_use]
    pub fn render(self) -> &'static str {
        match self {
            Self::StarWars => STARWARS_BANNER,
            Self::Plain => "model-signing",
        }
    }
}

/// Run `model-signing version`.
///
/// # Errors
///
/// Returns `CliError::Io` if the output cannot be written.
pub fn run(args: &VersionArgs, font: BannerFont, out: &mut dyn Write) -> Result<(), CliError> {
    let info = VersionInfo::current();
    if args.json {
        let json = serde_json::to_string_pretty(&info).map_err(std::io::Error::from)?;
        writeln!(out, "{json}")?;
    } else {
        write_text(&info, font, out)?;
    }
    Ok(())
}

fn write_text(info: &VersionInfo, font: BannerFont, out: &mut dyn Write) -> std::io::Result<()> {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    for (label, value) in info.rows() {
        table.add_row([label, value]);
    }

    writeln!(out, "{}", font.render().trim_matches('\n'))?;
    writeln!(out)?;
    writeln!(out, "model-signing: {DESCRIPTION}")?;
    writeln!(out, "{}", env!("CARGO_PKG_REPOSITORY"))?;
    writeln!(out)?;
    writeln!(out, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(json: bool, font: BannerFont) -> String {
        let mut out = Vec::new();
        run(&VersionArgs { json }, font, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_has_banner_and_fields() {
        let text = render(false, BannerFont::StarWars);
        assert!(text.starts_with(".___  ___."));
        assert!(text.contains("model-signing: ML model signing and verification."));
        assert!(text.contains("GitVersion:"));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
        assert!(text.contains("Platform:"));
    }

    #[test]
    fn test_plain_font() {
        let text = render(false, BannerFont::Plain);
        assert!(text.starts_with("model-signing\n"));
    }

    #[test]
    fn test_json_output() {
        let text = render(true, BannerFont::StarWars);
        let parsed: VersionInfo = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, VersionInfo::current());
        assert!(!text.contains(".___"));
    }
}
