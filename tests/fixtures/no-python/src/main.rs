fn main() {
    let engine = Engine::new();
}
