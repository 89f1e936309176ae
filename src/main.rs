fn main() -> anyhow::Result<()> {
    pollster::block_on(roughboard::run())
}
