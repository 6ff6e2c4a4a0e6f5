//! essh binary entry point

fn main() -> anyhow::Result<()> {
    essh::run()
}
