//! Standard command tables.
//!
//! The built-in commands every deployment carries: ping, general bot
//! information, moderation and owner tools, and debugging helpers, plus the
//! `clear` and `help` shortcuts. Collaborator plugins register their own
//! tables alongside these through the same builder.

use herald_foundation::Result;

use crate::registry::{CommandDecl, CommandRegistry, ManualEntry, RegistryBuilder};

/// Adds the standard command declarations to a builder.
#[must_use]
pub fn register_standard(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .command(
            CommandDecl::new("ping").rule("&").manual(
                ManualEntry::new("Command to ping the bot for a response.")
                    .usage("(argument)", "Optional argument."),
            ),
        )
        .command(
            CommandDecl::new("base")
                .rule("version")
                .rule("source")
                .rule("uptime")
                .rule("help: ?topic:")
                .alias("version", ["ver", "v"])
                .alias("source", ["src", "git"])
                .alias("help", ["h"])
                .manual(
                    ManualEntry::new("Base commands.")
                        .usage("-version", "Gets the bot version and date.")
                        .usage("-source", "Gets the link to the bot source.")
                        .usage("-uptime", "Gets how long the bot has been up.")
                        .usage(
                            "-help <command> (-topic <index>)",
                            "Gets help about the given command, with details \
                             at the given usage index if provided.",
                        ),
                ),
        )
        .command(
            CommandDecl::new("mod")
                .rule("info")
                .rule("block:")
                .rule("unblock:")
                .rule("clear")
                .alias("info", ["i"])
                .alias("clear", ["c"])
                .manual(
                    ManualEntry::new("Commands for server bot moderators.")
                        .usage("-info", "Gets server information.")
                        .usage("-block <user>", "Blocks the user from bot interaction.")
                        .usage("-unblock <user>", "Unblocks the user from bot interaction.")
                        .usage("-clear", "Pushes chat upwards."),
                ),
        )
        .command(
            CommandDecl::new("owner")
                .rule("halt")
                .rule("restart")
                .rule("add:")
                .rule("remove:")
                .rule("ip")
                .rule("backup")
                .manual(
                    ManualEntry::new("Commands for the owner only.")
                        .usage("-halt", "Stops the bot.")
                        .usage("-restart", "Restarts the bot.")
                        .usage("-add <user>", "Adds the user to the moderators list.")
                        .usage("-remove <user>", "Removes the user from the moderators list.")
                        .usage("-ip", "Gets the internal IP address of the bot.")
                        .usage("-backup", "Sends each owner a copy of the bot data files."),
                ),
        )
        .command(
            CommandDecl::new("debug")
                .rule("plugin:")
                .rule("plugin list")
                .rule("eval ^")
                .rule("latency")
                .alias("plugin", ["p"])
                .alias("list", ["l"])
                .alias("eval", ["evaluate", "python", "py"])
                .alias("latency", ["ping"])
                .manual(
                    ManualEntry::new("Debug commands.")
                        .usage("-plugin <plugin>", "Shows information about the plugin.")
                        .usage("-plugin -list", "Lists all active plugins.")
                        .usage("-eval <expression>", "Evaluates the given expression.")
                        .usage("-latency", "Gets ping time to the current server.")
                        .other("Be careful with these commands! They can break the bot."),
                ),
        )
        .shortcut("clear", "mod -clear", "")
        .shortcut("help", "base -help {}", "^")
}

/// Builds a registry holding only the standard tables.
///
/// # Errors
///
/// Returns a configuration fault if the standard tables are inconsistent;
/// that would be a packaging defect, not a runtime condition.
pub fn standard_registry() -> Result<CommandRegistry> {
    register_standard(CommandRegistry::builder())
        .build()
        .map_err(|e| e.from_source("standard tables"))
}
