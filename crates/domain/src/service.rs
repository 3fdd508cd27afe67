use log::{debug, error};

use crate::{ReadError, ThresholdTable, ThresholdTableRepository, ThresholdTableService};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ThresholdTableRepository> ThresholdTableService for Service<R> {
    async fn get_threshold_table(&self) -> Result<ThresholdTable, ReadError> {
        let threshold_table = log_on_error!(
            self.repository.read_threshold_table(),
            ReadError,
            "get",
            "threshold table"
        )?;
        for (exercise, sex) in threshold_table.missing() {
            error!("threshold table contains no thresholds for {exercise} ({sex})");
        }
        Ok(threshold_table)
    }
}
