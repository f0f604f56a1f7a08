use astra::Server;
use sales_pipeline::db::connection::{init_db, Database};
use sales_pipeline::router::handle;
use sales_pipeline::templates;
use std::net::SocketAddr;

fn main() {
    // Create the database handle; SALES_DB overrides the default path.
    let db = Database::from_env();

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting dashboard at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // Serve requests, passing the db handle into the closure.
    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
