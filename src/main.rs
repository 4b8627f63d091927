fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    romeo::runtime::run()
}
