/// Custom usage and help layout shared by every command in the tree.
use clap::Command;

/// Help layout: description, usage, then argument and subcommand sections.
const USAGE_TEMPLATE: &str = "\
{about-with-newline}
{usage-heading}
{tab}{usage}

{all-args}{after-help}";

/// Footer for commands that have subcommands.
const SUBCOMMAND_FOOTER: &str =
    "Use \"model-signing [command] --help\" for more information about a command.";

/// Apply the custom usage layout to `cmd` and every descendant.
#[must_use]
pub fn set_custom_usage(cmd: Command) -> Command {
    let children: Vec<String> = cmd
        .get_subcommands()
        .map(|sub| sub.get_name().to_owned())
        .collect();

    let cmd = if children.is_empty() {
        cmd.help_template(USAGE_TEMPLATE)
    } else {
        cmd.help_template(USAGE_TEMPLATE)
            .after_help(SUBCOMMAND_FOOTER)
    };

    children
        .into_iter()
        .fold(cmd, |cmd, name| cmd.mut_subcommand(name, set_custom_usage))
}
