fn main() -> anyhow::Result<()> {
    context_export_formatter::cli::run()
}
