use yew_drawer::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
