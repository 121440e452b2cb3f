fn main() -> anyhow::Result<()> {
    pointer_gestures::run()
}
