pub mod create;
pub mod decisao;
pub mod get;
pub mod lembretes;
pub mod list;
pub mod lixeira;
pub mod metricas;
pub mod questionario;
