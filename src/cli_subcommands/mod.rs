use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and persist the session cookie
    Login(LoginArgs),

    /// Create an account and log in
    Register(RegisterArgs),

    /// Drop the stored session (and tell the backend)
    Logout,

    /// Check whether the stored session is still valid
    Whoami(WhoamiArgs),

    /// Show or set the backend base URL
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },

    /// List folders (filterable, paginated)
    Folders(FoldersArgs),

    /// Create a folder, optionally seeding it with files
    CreateFolder(CreateFolderArgs),

    /// Delete a folder and everything in it
    DeleteFolder(DeleteFolderArgs),

    /// List files in a folder (filterable, paginated)
    Files(FilesArgs),

    /// Upload one or more files into a folder
    Upload(UploadArgs),

    /// Delete one file from a folder
    DeleteFile(DeleteFileArgs),

    /// Download a file, saved under its original name by default
    Download(DownloadArgs),

    /// Check a file is previewable and print its preview URL
    Preview(PreviewArgs),
}

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long)]
    pub(crate) password: String,
}

#[derive(Args)]
pub(crate) struct RegisterArgs {
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) password: String,
}

#[derive(Args)]
pub(crate) struct WhoamiArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand)]
pub(crate) enum RemoteCommands {
    /// Show the configured backend
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set the backend base URL
    Set {
        #[arg(long)]
        url: String,
    },
}

#[derive(Args)]
pub(crate) struct FoldersArgs {
    /// Case-insensitive substring filter on folder paths
    #[arg(long)]
    pub(crate) query: Option<String>,

    /// 1-based page (out-of-range pages clamp)
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,

    /// Emit the page as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CreateFolderArgs {
    /// Folder path (must not be empty)
    pub(crate) name: String,

    /// Local files to upload into the new folder
    #[arg(long = "file", value_name = "PATH")]
    pub(crate) files: Vec<PathBuf>,
}

#[derive(Args)]
pub(crate) struct DeleteFolderArgs {
    pub(crate) path: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub(crate) yes: bool,
}

#[derive(Args)]
pub(crate) struct FilesArgs {
    /// Folder to list
    pub(crate) folder: String,

    /// Case-insensitive substring filter on filenames
    #[arg(long)]
    pub(crate) query: Option<String>,

    /// 1-based page (out-of-range pages clamp)
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,

    /// Emit the page as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct UploadArgs {
    pub(crate) folder: String,

    /// Local files; each becomes its own upload request
    #[arg(required = true, num_args = 1..)]
    pub(crate) files: Vec<PathBuf>,
}

#[derive(Args)]
pub(crate) struct DeleteFileArgs {
    pub(crate) folder: String,
    pub(crate) filename: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub(crate) yes: bool,
}

#[derive(Args)]
pub(crate) struct DownloadArgs {
    pub(crate) folder: String,
    pub(crate) filename: String,

    /// Destination path (defaults to the original filename)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct PreviewArgs {
    pub(crate) folder: String,
    pub(crate) filename: String,

    /// Revision marker used to bust caches on the backend
    #[arg(long, default_value_t = 0)]
    pub(crate) revision: i64,
}
