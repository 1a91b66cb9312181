//! src/domain/form_layout.rs
//!
//! Sections and fields of the admission wizard. The wizard page is rendered
//! from this description; the intro and payment steps wrap around it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Number,
    TextArea,
    Select(&'static [&'static str]),
    Radio(&'static [&'static str]),
    File(&'static str),
    Checkbox,
}

impl FieldKind {
    /// `type` attribute for kinds rendered as a plain `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select(_) => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Radio(_) => "radio",
            FieldKind::File(_) => "file",
            FieldKind::Checkbox => "checkbox",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FieldKind::Select(options) | FieldKind::Radio(options) => options,
            _ => &[],
        }
    }

    /// `accept` attribute of file inputs
    pub fn accept(&self) -> &'static str {
        match self {
            FieldKind::File(accept) => accept,
            _ => "",
        }
    }

    pub fn is_textarea(&self) -> bool {
        matches!(self, FieldKind::TextArea)
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FieldKind::Select(_))
    }

    pub fn is_radio(&self) -> bool {
        matches!(self, FieldKind::Radio(_))
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldKind::Checkbox)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FormSection {
    pub title: &'static str,
    pub fields: &'static [FormField],
}

const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField {
        name,
        label,
        kind,
        required: true,
    }
}

const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField {
        name,
        label,
        kind,
        required: false,
    }
}

const IMAGES: &str = "image/*";
const DOCUMENTS: &str = ".pdf,.jpg,.jpeg,.png";

pub const SECTIONS: &[FormSection] = &[
    FormSection {
        title: "Personal Information",
        fields: &[
            required("firstName", "First Name", FieldKind::Text),
            optional("middleName", "Middle Name", FieldKind::Text),
            required("lastName", "Last Name", FieldKind::Text),
            required("dob", "Date of Birth", FieldKind::Date),
            required("gender", "Gender", FieldKind::Select(&["Male", "Female"])),
            required("nationality", "Nationality", FieldKind::Text),
            required("stateOfOrigin", "State of Origin", FieldKind::Text),
            required("contactAddress", "Contact Address", FieldKind::TextArea),
            required("email", "Email Address", FieldKind::Email),
            required("phone", "Phone Number", FieldKind::Tel),
            required("photo", "Passport Photograph", FieldKind::File(IMAGES)),
        ],
    },
    FormSection {
        title: "Academic Information",
        fields: &[
            required(
                "highestEducation",
                "Highest Level of Education",
                FieldKind::Select(&["SSCE", "OND", "HND", "Bachelor's Degree", "Master's Degree"]),
            ),
            required(
                "previousInstitutions",
                "Previous Institutions Attended",
                FieldKind::TextArea,
            ),
            required("graduationYear", "Year of Graduation", FieldKind::Number),
            required("examResults", "Exam Results", FieldKind::File(DOCUMENTS)),
            optional("certifications", "Other Certifications", FieldKind::TextArea),
        ],
    },
    FormSection {
        title: "Program Selection",
        fields: &[
            required(
                "desiredCourse",
                "Desired Course",
                FieldKind::Select(&[
                    "Computer Science",
                    "Business Administration",
                    "Mass Communication",
                    "Accounting",
                    "Public Administration",
                    "Education",
                ]),
            ),
            required(
                "desiredProgram",
                "Desired Program",
                FieldKind::Select(&["Diploma", "Degree", "Postgraduate"]),
            ),
            required(
                "studyMode",
                "Mode of Study",
                FieldKind::Radio(&["full-time", "distance"]),
            ),
        ],
    },
    FormSection {
        title: "Parent/Guardian Information",
        fields: &[
            required("guardianName", "Guardian Name", FieldKind::Text),
            required("guardianRelationship", "Relationship", FieldKind::Text),
            required("guardianPhone", "Guardian Phone Number", FieldKind::Tel),
            required("guardianEmail", "Guardian Email", FieldKind::Email),
            required("guardianAddress", "Guardian Address", FieldKind::TextArea),
        ],
    },
    FormSection {
        title: "Additional Information",
        fields: &[
            required(
                "heardAboutUs",
                "How did you hear about us?",
                FieldKind::Select(&["Social Media", "Friend/Family", "Newspaper", "Website", "Other"]),
            ),
            optional("specialNeeds", "Special Needs or Accommodations", FieldKind::TextArea),
        ],
    },
    FormSection {
        title: "Declaration",
        fields: &[
            required(
                "agreeTerms",
                "I declare that the information provided is true and I agree to the terms and conditions",
                FieldKind::Checkbox,
            ),
            required("signature", "Electronic Signature", FieldKind::Text),
        ],
    },
];

/// Intro, one step per section, payment.
pub fn step_count() -> usize {
    SECTIONS.len() + 2
}
