/// The form fields a validation error can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Field {
    /// The lot selector
    SaleLot,
    /// The bidder name input
    BidderName,
    /// The bidding number input
    BiddingNumber,
    /// The amount input
    BidAmount,
}

/// A user-correctable problem with one field of the bid form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    /// The offending field
    pub field: Field,
    /// A message suitable for display next to the field
    pub message: String,
}

/// The outcome of validating a bid proposal.
///
/// An empty report means the proposal is valid. Errors are kept in the order
/// the rules were checked, and a field may carry more than one error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    /// Whether the proposal may be submitted
    pub valid: bool,
    /// Every error found, in rule order
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// A report for a valid proposal.
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Attach an error to a field.
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Whether the proposal may be submitted.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The errors attached to one field.
    pub fn errors_for(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |error| error.field == field)
    }

    /// The first error, which is what an alert-style form would show.
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Drop all but the first error.
    pub fn truncate_to_first(&mut self) {
        self.errors.truncate(1);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::valid()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.valid {
            return write!(f, "valid");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error.message)?;
        }
        Ok(())
    }
}
