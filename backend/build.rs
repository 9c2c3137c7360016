// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Emits `VERGEN_BUILD_TIMESTAMP` and `VERGEN_GIT_SHA` logged by the backend at startup.

fn emit_build_info() -> Result<(), String> {
    let build = vergen_gix::BuildBuilder::all_build().map_err(|e| format!("build info: {e}"))?;
    let git = vergen_gix::GixBuilder::all_git().map_err(|e| format!("git info: {e}"))?;
    vergen_gix::Emitter::default()
        .add_instructions(&build)
        .map_err(|e| format!("build instructions: {e}"))?
        .add_instructions(&git)
        .map_err(|e| format!("git instructions: {e}"))?
        .emit()
        .map_err(|e| format!("emitting: {e}"))?;
    Ok(())
}

fn main() {
    if let Err(err) = emit_build_info() {
        panic!("Failed to emit build info: {err}");
    }
}
