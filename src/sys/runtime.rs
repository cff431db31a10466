use crate::config;
use crate::events::AppEvent;
use crate::sys::server;
use async_channel::Sender;
use std::thread;

/// Control socket and config watcher, on their own thread so the GTK main
/// loop never blocks on them.
pub fn start_background_services(tx: Sender<AppEvent>) {
    let spawned = thread::Builder::new()
        .name("fandial-services".into())
        .spawn(move || serve(tx));

    if let Err(e) = spawned {
        log::error!("Remote activation and config reload unavailable: {}", e);
    }
}

fn serve(tx: Sender<AppEvent>) {
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start the dial's background runtime: {}", e);
            return;
        }
    };

    rt.block_on(async {
        tokio::join!(server::run_server(tx.clone()), config::run_async_watcher(tx));
    });
    log::debug!("Background services stopped");
}
