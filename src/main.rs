use dioxus::logger::tracing::Level;

use csv_dropzone::App;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(App);
}
