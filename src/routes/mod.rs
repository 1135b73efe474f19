use crate::utils::webutils::validate_token;
use actix_web::web;

pub mod avaliacao;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/avaliacoes")
            .wrap(auth)
            .service(avaliacao::create::create)
            .service(avaliacao::list::list)
            // fixed segments before the /{id} family
            .service(avaliacao::metricas::metricas)
            .service(avaliacao::lembretes::lembretes)
            .service(avaliacao::get::get)
            .service(avaliacao::questionario::questionario)
            .service(avaliacao::decisao::decisao)
            .service(avaliacao::lixeira::lixeira)
            .service(avaliacao::lixeira::restaurar),
    );
}
