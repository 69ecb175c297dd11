#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    musicschool_forms_server::run().await
}
