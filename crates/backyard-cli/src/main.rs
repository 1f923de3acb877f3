mod command;
mod roster;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
