/// Two-way conversion between a stored entity and its editable form.
///
/// Rendering a form never fails. Reading one back may, when a value the
/// validators should have rejected reaches the mapper anyway; that is a
/// contract breach between the two stages and surfaces as `Self::Error`.
pub trait FormMapper {
    type Entity;
    type Form;
    type Error: std::error::Error;

    /// Build the form shown when an entity is edited.
    fn to_form(&self, entity: &Self::Entity) -> Self::Form;

    /// Rebuild the entity from a submitted, already validated form.
    fn to_entity(&self, form: &Self::Form) -> Result<Self::Entity, Self::Error>;

    /// [`FormMapper::to_form`] with absent input mapped to absent output.
    fn to_form_opt(&self, entity: Option<&Self::Entity>) -> Option<Self::Form> {
        entity.map(|entity| self.to_form(entity))
    }

    /// [`FormMapper::to_entity`] with absent input mapped to absent output.
    fn to_entity_opt(
        &self,
        form: Option<&Self::Form>,
    ) -> Result<Option<Self::Entity>, Self::Error> {
        form.map(|form| self.to_entity(form)).transpose()
    }
}
