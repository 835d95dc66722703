//! Biometric commands

use super::print_panel;
use crate::cli::BiometricCommands;
use crate::dashboard::{Dashboard, messages};
use crate::interfaces::cli::{CliError, finish};

pub async fn run_biometric_command(
    dashboard: &Dashboard,
    action: BiometricCommands,
) -> Result<(), CliError> {
    let biometric = &dashboard.biometric;
    match action {
        BiometricCommands::Train => {
            println!("{}", messages::biometric::TRAINING);
            let outcome = biometric.train().await;
            print_panel(&biometric.view().read().train_status);
            finish(outcome, "Training")
        }
        BiometricCommands::Upload { name, files } => {
            biometric.set_user_name(&name);
            biometric.select_photos(files);
            let outcome = biometric.upload().await;
            print_panel(&biometric.view().read().upload_status);
            finish(outcome, "Upload")
        }
    }
}
