use serde::{Deserialize, Serialize};

/// Seller or buyer on an invoice, as known to the invoicing provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingParty {
    /// Provider-side identifier.
    pub id: String,
    /// First name (individuals).
    pub name: Option<String>,
    /// Last name (individuals).
    pub surname: Option<String>,
    /// Registered company name.
    pub company: Option<String>,
    pub street_and_number: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    /// Country name or ISO 3166-1 code, as stored by the provider.
    pub country: Option<String>,
    /// Tax identification number (NIP for Polish companies).
    pub tax_no: Option<String>,
    /// Short alias used to look the party up at the provider.
    pub shortcut: Option<String>,
}

impl BillingParty {
    /// A company party with a tax number.
    #[allow(clippy::too_many_arguments)]
    pub fn company(
        id: impl Into<String>,
        company: impl Into<String>,
        street_and_number: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        tax_no: impl Into<String>,
        shortcut: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            surname: None,
            company: Some(company.into()),
            street_and_number: Some(street_and_number.into()),
            postal_code: Some(postal_code.into()),
            city: Some(city.into()),
            country: Some(country.into()),
            tax_no: Some(tax_no.into()),
            shortcut,
        }
    }

    /// A private individual. Individuals never carry a tax number.
    #[allow(clippy::too_many_arguments)]
    pub fn individual(
        id: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        street_and_number: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        shortcut: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            surname: Some(surname.into()),
            company: None,
            street_and_number: Some(street_and_number.into()),
            postal_code: Some(postal_code.into()),
            city: Some(city.into()),
            country: Some(country.into()),
            tax_no: None,
            shortcut,
        }
    }

    pub fn has_tax_id(&self) -> bool {
        is_not_blank(&self.tax_no)
    }

    /// Whether every field needed to issue a company invoice is filled in.
    pub fn has_company_details(&self) -> bool {
        [
            &self.company,
            &self.street_and_number,
            &self.postal_code,
            &self.city,
            &self.country,
            &self.tax_no,
        ]
        .into_iter()
        .all(is_not_blank)
    }

    pub fn has_shortcut(&self) -> bool {
        is_not_blank(&self.shortcut)
    }
}

fn is_not_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
