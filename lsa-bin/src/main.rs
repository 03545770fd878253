use clap::Parser;
use env_logger::Env;
use lsa_bin::{cli::Cli, run};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}

#[cfg(test)]
mod test {
    #[test]
    fn cli_test() {
        <lsa_bin::cli::Cli as clap::CommandFactory>::command().debug_assert();
    }
}
