use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    kickstart completions bash > ~/.bash_completion.d/kickstart\n\n\
                  Generate zsh completions:\n    kickstart completions zsh > ~/.zfunc/_kickstart\n\n\
                  Generate fish completions:\n    kickstart completions fish > ~/.config/fish/completions/kickstart.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
