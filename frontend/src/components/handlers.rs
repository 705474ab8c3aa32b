use gloo_console::error;
use gloo_file::File as GlooFile;
use shared::state::{Command, Outcome};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::utils;
use crate::api;
use crate::{FileData, Model, Msg};

/// Runs the side effect the reducer asked for. Network commands carry the
/// sequence number of the request they belong to; the reducer drops any
/// completion whose sequence has been superseded.
pub fn run_command(ctx: &Context<Model>, command: Command<FileData>) {
    match command {
        Command::Upload { seq, file } => send_upload(ctx, seq, file.file),
        Command::QueryImage { seq, file } => send_image_query(ctx, seq, file.file),
        Command::QueryText { seq, query } => send_text_query(ctx, seq, query),
        Command::Warn(message) | Command::Alert(message) => utils::alert(message),
        Command::Announce(message) => utils::alert(&message),
    }
}

fn send_upload(ctx: &Context<Model>, seq: u64, file: GlooFile) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = match api::upload_image(&file).await {
            Ok(response) => Outcome::Uploaded(response.message),
            Err(err) => {
                error!(format!("Error uploading image: {err:?}"));
                Outcome::Failed
            }
        };
        link.send_message(Msg::Finished { seq, outcome });
    });
}

fn send_image_query(ctx: &Context<Model>, seq: u64, file: GlooFile) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = match api::query_image(&file).await {
            Ok(response) => Outcome::Results(response.similar_images),
            Err(err) => {
                error!(format!("Error querying similar images: {err:?}"));
                Outcome::Failed
            }
        };
        link.send_message(Msg::Finished { seq, outcome });
    });
}

fn send_text_query(ctx: &Context<Model>, seq: u64, query: String) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = match api::query_text(&query).await {
            Ok(response) => Outcome::Results(response.similar_images),
            Err(err) => {
                error!(format!("Error querying similar images by text: {err:?}"));
                Outcome::Failed
            }
        };
        link.send_message(Msg::Finished { seq, outcome });
    });
}
