use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{HttpResponse, web};

use crate::config::SiteConfig;

/// Static assets, the built bundle, and an `index.html` fallback for any
/// path the client-side router owns (`/login`, ...).
pub fn register(config: &SiteConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    let dist = config.dist_dir.clone();
    let assets = config.assets_dir.clone();
    let index = dist.join("index.html");

    move |cfg| {
        cfg.service(Files::new("/assets", assets))
            .service(
                Files::new("/", dist)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let res = match NamedFile::open_async(&index).await {
                                Ok(file) => file.into_response(&req),
                                Err(e) => {
                                    log::error!("cannot open {}: {e}", index.display());
                                    HttpResponse::NotFound().finish()
                                }
                            };
                            Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                        }
                    })),
            );
    }
}
