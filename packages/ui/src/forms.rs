//! Form drafts: the loosely-typed input state behind each modal form.
//!
//! Drafts hold raw input strings and convert into the per-operation DTOs
//! at the submit boundary, running validation on the way. A failed
//! conversion blocks submission before any network call. Empty optional
//! fields are omitted from the resulting DTO rather than sent as empty
//! strings, so partial updates cannot synthesize values the user did not
//! supply.

use api::{
    Animal, CreateAnimal, CreateOwner, CreateRecord, MedicalRecord, Owner, UpdateAnimal,
    UpdateOwner, UpdateRecord, ValidationError,
};
use chrono::{DateTime, Utc};

use crate::format;

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn invalid(field: &'static str, message: &str) -> ValidationError {
    ValidationError {
        field,
        message: message.to_string(),
    }
}

/// Owner form state for the dashboard modal and the inline contact editor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnerDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl OwnerDraft {
    pub fn from_owner(owner: &Owner) -> Self {
        Self {
            name: owner.name.clone(),
            phone: owner.phone.clone(),
            email: owner.email.clone().unwrap_or_default(),
            street: owner.street.clone().unwrap_or_default(),
            number: owner.number.clone().unwrap_or_default(),
            complement: owner.complement.clone().unwrap_or_default(),
            neighborhood: owner.neighborhood.clone().unwrap_or_default(),
            city: owner.city.clone().unwrap_or_default(),
            state: owner.state.clone().unwrap_or_default(),
            zip_code: owner.zip_code.clone().unwrap_or_default(),
        }
    }

    pub fn to_create(&self) -> Result<CreateOwner, ValidationError> {
        let create = CreateOwner {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: optional(&self.email),
            street: optional(&self.street),
            number: optional(&self.number),
            complement: optional(&self.complement),
            neighborhood: optional(&self.neighborhood),
            city: optional(&self.city),
            state: optional(&self.state),
            zip_code: optional(&self.zip_code),
        };
        create.validate()?;
        Ok(create)
    }

    /// Full-form update used by the dashboard edit modal: every edited
    /// field is sent, empty optionals are omitted.
    pub fn to_update(&self) -> Result<UpdateOwner, ValidationError> {
        let create = self.to_create()?;
        Ok(UpdateOwner {
            name: Some(create.name),
            phone: Some(create.phone),
            email: create.email,
            street: create.street,
            number: create.number,
            complement: create.complement,
            neighborhood: create.neighborhood,
            city: create.city,
            state: create.state,
            zip_code: create.zip_code,
        })
    }

    /// The inline editor on the owner page only touches the contact
    /// subset; address fields other than city/state are left alone.
    pub fn to_contact_update(&self) -> Result<UpdateOwner, ValidationError> {
        api::validate::require(&self.name, "name")?;
        api::validate::phone(&self.phone)?;
        if let Some(email) = optional(&self.email) {
            api::validate::email(&email)?;
        }
        Ok(UpdateOwner {
            name: Some(self.name.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            email: optional(&self.email),
            city: optional(&self.city),
            state: optional(&self.state),
            ..Default::default()
        })
    }
}

/// Animal form state for the owner page modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimalDraft {
    pub name: String,
    pub species: String,
    pub breed: String,
}

impl AnimalDraft {
    pub fn from_animal(animal: &Animal) -> Self {
        Self {
            name: animal.name.clone(),
            species: animal.species.clone(),
            breed: animal.breed.clone().unwrap_or_default(),
        }
    }

    /// The foreign key comes from the page, not the form: a new animal is
    /// always created under the owner being viewed.
    pub fn to_create(&self, owner_id: &str) -> Result<CreateAnimal, ValidationError> {
        let create = CreateAnimal {
            name: self.name.trim().to_string(),
            species: self.species.trim().to_string(),
            breed: optional(&self.breed),
            owner_id: owner_id.to_string(),
        };
        create.validate()?;
        Ok(create)
    }

    pub fn to_update(&self) -> Result<UpdateAnimal, ValidationError> {
        api::validate::require(&self.name, "name")?;
        api::validate::require(&self.species, "species")?;
        Ok(UpdateAnimal {
            name: Some(self.name.trim().to_string()),
            species: Some(self.species.trim().to_string()),
            breed: optional(&self.breed),
        })
    }
}

/// Medical record form state. `attended_at` is the raw `datetime-local`
/// input value and is parsed at the boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordDraft {
    pub weight: String,
    pub medications: String,
    pub dosage: String,
    pub notes: String,
    pub attended_at: String,
}

impl RecordDraft {
    pub fn from_record(record: &MedicalRecord) -> Self {
        Self {
            weight: record.weight.clone(),
            medications: record.medications.clone(),
            dosage: record.dosage.clone(),
            notes: record.notes.clone(),
            attended_at: format::datetime_local(&record.attended_at),
        }
    }

    fn parse_attended_at(&self) -> Result<DateTime<Utc>, ValidationError> {
        api::validate::require(&self.attended_at, "attendedAt")
            .map_err(|_| invalid("attendedAt", "attendance date is required"))?;
        format::parse_datetime_local(&self.attended_at)
            .ok_or_else(|| invalid("attendedAt", "attendance date is invalid"))
    }

    pub fn to_create(&self, animal_id: &str) -> Result<CreateRecord, ValidationError> {
        let attended_at = self.parse_attended_at()?;
        let create = CreateRecord {
            weight: self.weight.trim().to_string(),
            medications: self.medications.trim().to_string(),
            dosage: self.dosage.trim().to_string(),
            notes: self.notes.trim().to_string(),
            attended_at,
            animal_id: animal_id.to_string(),
        };
        create.validate()?;
        Ok(create)
    }

    /// Edits resubmit the whole form, so the same required-field rules
    /// apply as for creation.
    pub fn to_update(&self) -> Result<UpdateRecord, ValidationError> {
        let attended_at = self.parse_attended_at()?;
        api::validate::require(&self.weight, "weight")?;
        api::validate::require(&self.medications, "medications")?;
        api::validate::require(&self.dosage, "dosage")?;
        api::validate::require(&self.notes, "notes")?;
        Ok(UpdateRecord {
            weight: Some(self.weight.trim().to_string()),
            medications: Some(self.medications.trim().to_string()),
            dosage: Some(self.dosage.trim().to_string()),
            notes: Some(self.notes.trim().to_string()),
            attended_at: Some(attended_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn owner() -> Owner {
        Owner {
            id: "o1".to_string(),
            name: "Carlos".to_string(),
            phone: "11999990000".to_string(),
            email: Some("carlos@example.com".to_string()),
            street: None,
            number: None,
            complement: None,
            neighborhood: None,
            city: Some("RJ".to_string()),
            state: None,
            zip_code: None,
            user_id: "u1".to_string(),
            animals: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn owner_draft_round_trips_optionals() {
        let draft = OwnerDraft::from_owner(&owner());
        assert_eq!(draft.city, "RJ");
        assert_eq!(draft.state, "");

        let update = draft.to_update().unwrap();
        assert_eq!(update.city.as_deref(), Some("RJ"));
        // Blank fields are omitted, not sent as empty strings.
        assert_eq!(update.state, None);
    }

    #[test]
    fn contact_update_never_touches_street_address() {
        let mut draft = OwnerDraft::from_owner(&owner());
        draft.street = "Av. Paulista".to_string();

        let update = draft.to_contact_update().unwrap();
        assert_eq!(update.street, None);
        assert_eq!(update.number, None);
        assert_eq!(update.zip_code, None);
        assert_eq!(update.name.as_deref(), Some("Carlos"));
    }

    #[test]
    fn owner_draft_requires_name_and_phone() {
        let draft = OwnerDraft {
            phone: "11999990000".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.to_create().unwrap_err().field, "name");

        let draft = OwnerDraft {
            name: "Carlos".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.to_create().unwrap_err().field, "phone");
    }

    #[test]
    fn record_draft_missing_notes_is_rejected() {
        let draft = RecordDraft {
            weight: "4.2kg".to_string(),
            medications: "antibiotic".to_string(),
            dosage: "1x day".to_string(),
            notes: String::new(),
            attended_at: "2024-06-10T14:30".to_string(),
        };
        let err = draft.to_create("a1").unwrap_err();
        assert_eq!(err.field, "notes");
    }

    #[test]
    fn record_draft_parses_datetime_local_input() {
        let draft = RecordDraft {
            weight: "4.2kg".to_string(),
            medications: "antibiotic".to_string(),
            dosage: "1x day".to_string(),
            notes: "recovering".to_string(),
            attended_at: "2024-06-10T14:30".to_string(),
        };
        let create = draft.to_create("a1").unwrap();
        assert_eq!(
            create.attended_at,
            Utc.with_ymd_and_hms(2024, 6, 10, 14, 30, 0).unwrap()
        );
        assert_eq!(create.animal_id, "a1");
    }

    #[test]
    fn record_draft_rejects_malformed_date() {
        let draft = RecordDraft {
            weight: "4.2kg".to_string(),
            medications: "antibiotic".to_string(),
            dosage: "1x day".to_string(),
            notes: "recovering".to_string(),
            attended_at: "next tuesday".to_string(),
        };
        let err = draft.to_create("a1").unwrap_err();
        assert_eq!(err.field, "attendedAt");
    }

    #[test]
    fn animal_draft_seeds_from_entity() {
        let animal = Animal {
            id: "a1".to_string(),
            name: "Rex".to_string(),
            species: "dog".to_string(),
            breed: Some("poodle".to_string()),
            owner_id: "o1".to_string(),
            owner: None,
            records: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let draft = AnimalDraft::from_animal(&animal);
        assert_eq!(draft.breed, "poodle");

        let update = draft.to_update().unwrap();
        assert_eq!(update.name.as_deref(), Some("Rex"));
        assert_eq!(update.breed.as_deref(), Some("poodle"));
    }
}
