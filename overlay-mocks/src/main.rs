use overlay_mocks::App;

fn main() {
    // launch installs the default tracing subscriber for the platform
    dioxus::launch(App);
}
