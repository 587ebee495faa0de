const COMMANDS: &[&str] = &["share", "can_share", "cleanup"];

fn main() {
  tauri_plugin::Builder::new(COMMANDS).build();
}
