use catalog_contracts::mapper::FormMapper;
use tracing::{debug, error};

use crate::error::{MappingError, SubmitError};
use crate::validation::{FormRef, ValidatorRegistry};

/// Validate a submitted form and, only when it passes, rebuild the entity.
///
/// A rejected form comes back as [`SubmitError::Invalid`] with the full
/// report so it can be shown again. A mapping failure after a clean report
/// means the rule tables and the mapper disagree; it is logged as an error.
pub fn submit<'a, M>(
    registry: &ValidatorRegistry,
    mapper: &M,
    form: &'a M::Form,
) -> Result<M::Entity, SubmitError>
where
    M: FormMapper<Error = MappingError>,
    &'a M::Form: Into<FormRef<'a>>,
{
    let form_ref: FormRef<'a> = form.into();
    let kind = form_ref.kind();

    let report = registry.validate(form_ref);
    if !report.is_valid() {
        return Err(SubmitError::Invalid(report));
    }

    match mapper.to_entity(form) {
        Ok(entity) => {
            debug!(form = %kind, "form accepted");
            Ok(entity)
        }
        Err(err) => {
            error!(form = %kind, error = %err, "validated form failed to map");
            Err(err.into())
        }
    }
}
