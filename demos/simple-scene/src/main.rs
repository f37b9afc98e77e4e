fn main() {
    simple_scene_demo::main();
}
