pub mod tokio_pacer;
