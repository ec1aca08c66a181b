use super::files::{
    handle_delete_file_command, handle_download_command, handle_files_command,
    handle_preview_command, handle_upload_command,
};
use super::folders::{
    handle_create_folder_command, handle_delete_folder_command, handle_folders_command,
};
use super::session::{
    handle_login_command, handle_logout_command, handle_register_command, handle_remote_command,
    handle_whoami_command,
};
use super::*;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => {
            with_store(|store| handle_login_command(store, args.username, args.password))?
        }
        Commands::Register(args) => with_store(|store| {
            handle_register_command(store, args.username, args.email, args.password)
        })?,
        Commands::Logout => with_store(handle_logout_command)?,
        Commands::Whoami(args) => with_store(|store| handle_whoami_command(store, args.json))?,
        Commands::Remote { command } => with_store(|store| handle_remote_command(store, command))?,
        Commands::Folders(args) => {
            with_store(|store| handle_folders_command(store, args.query, args.page, args.json))?
        }
        Commands::CreateFolder(args) => {
            with_store(|store| handle_create_folder_command(store, args.name, args.files))?
        }
        Commands::DeleteFolder(args) => {
            with_store(|store| handle_delete_folder_command(store, args.path, args.yes))?
        }
        Commands::Files(args) => with_store(|store| {
            handle_files_command(store, args.folder, args.query, args.page, args.json)
        })?,
        Commands::Upload(args) => {
            with_store(|store| handle_upload_command(store, args.folder, args.files))?
        }
        Commands::DeleteFile(args) => with_store(|store| {
            handle_delete_file_command(store, args.folder, args.filename, args.yes)
        })?,
        Commands::Download(args) => with_store(|store| {
            handle_download_command(store, args.folder, args.filename, args.out)
        })?,
        Commands::Preview(args) => with_store(|store| {
            handle_preview_command(store, args.folder, args.filename, args.revision)
        })?,
    }

    Ok(())
}
