fn main() {
    // Compile Slint UI files
    slint_build::compile("ui/main.slint").unwrap();
}
