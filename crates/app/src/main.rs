use teachers_app::App;

fn main() {
    teachers_app::logging::init();
    yew::Renderer::<App>::new().render();
}
