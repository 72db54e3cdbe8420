use tarief::engine::Engine;
use tarief::pricing::Tariff;
use tarief::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let tariff = Tariff::from_env().unwrap();
    let engine = Engine::new(tariff);

    serve(engine).await;
}
