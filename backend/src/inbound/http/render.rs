//! Server-side HTML rendering for the contact pages.
//!
//! Pages are assembled with `format!`; every piece of user-supplied text goes
//! through [`escape`] first.

use std::borrow::Cow;

use crate::domain::{Contact, ContactDraft, ContactField, ContactId};
use crate::inbound::http::forms::FormErrors;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 16);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Values and messages shown in a contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub values: ContactDraft,
    pub errors: FormErrors,
}

impl FormView {
    pub fn new(values: ContactDraft, errors: FormErrors) -> Self {
        Self { values, errors }
    }
}

fn label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Name",
        ContactField::Phone => "Phone",
        ContactField::Email => "Email",
        ContactField::Kind => "Type",
    }
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Phone => "tel",
        ContactField::Name | ContactField::Kind => "text",
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

fn form(action: &str, submit: &str, view: &FormView) -> String {
    let mut html = format!("<form method=\"post\" action=\"{}\">\n", escape(action));
    for field in ContactField::ALL {
        let name = field.as_str();
        let value = view.values.value(field).unwrap_or_default();
        html.push_str(&format!(
            "<p><label for=\"{name}\">{label}</label>\n\
             <input id=\"{name}\" name=\"{name}\" type=\"{kind}\" value=\"{value}\" required>\n",
            label = label(field),
            kind = input_type(field),
            value = escape(value),
        ));
        if let Some(message) = view.errors.get(field) {
            html.push_str(&format!(
                "<span class=\"error\">{}</span>\n",
                escape(message)
            ));
        }
        html.push_str("</p>\n");
    }
    html.push_str(&format!(
        "<p><input type=\"submit\" name=\"submit\" value=\"{}\"></p>\n</form>\n",
        escape(submit)
    ));
    html
}

fn contact_row(contact: &Contact) -> String {
    format!(
        "<tr><td>{name}</td><td>{phone}</td><td>{email}</td><td>{kind}</td>\
         <td><a href=\"/update/{id}\">Edit</a></td></tr>\n",
        name = escape(contact.name()),
        phone = escape(contact.phone()),
        email = escape(contact.email()),
        kind = escape(contact.kind()),
        id = contact.id(),
    )
}

/// Contact list plus the "add contact" form.
pub fn list_page(contacts: &[Contact], add_form: &FormView) -> String {
    let mut body = String::from("<h1>Contacts</h1>\n");
    if contacts.is_empty() {
        body.push_str("<p>No contacts yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Name</th><th>Phone</th><th>Email</th>\
             <th>Type</th><th></th></tr></thead>\n<tbody>\n",
        );
        for contact in contacts {
            body.push_str(&contact_row(contact));
        }
        body.push_str("</tbody>\n</table>\n");
    }
    body.push_str("<h2>Add contact</h2>\n");
    body.push_str(&form("/add", "Add", add_form));
    layout("Contacts", &body)
}

/// Edit form for an existing contact.
pub fn edit_page(id: ContactId, view: &FormView) -> String {
    let mut body = String::from("<h1>Update contact</h1>\n");
    body.push_str(&form(&format!("/update/{id}"), "Update", view));
    body.push_str("<p><a href=\"/\">Back to contacts</a></p>\n");
    layout("Update contact", &body)
}

/// Minimal page for failed requests.
pub fn message_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to contacts</a></p>\n",
        escape(title),
        escape(message)
    );
    layout(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactDetails;
    use crate::inbound::http::forms::ContactForm;
    use rstest::rstest;

    fn contact(name: &str) -> Contact {
        let details = ContactDetails::try_new(name, "5551234567", "alice@example.com", "Business")
            .expect("valid details");
        Contact::new(ContactId::new(3), details)
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("<b>&\"'", "&lt;b&gt;&amp;&quot;&#x27;")]
    fn escapes_markup(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape(raw), expected);
    }

    #[rstest]
    fn list_page_renders_every_field_and_edit_link() {
        let html = list_page(&[contact("Alice Wonderland")], &FormView::default());

        assert!(html.contains("Alice Wonderland"));
        assert!(html.contains("5551234567"));
        assert!(html.contains("alice@example.com"));
        assert!(html.contains("href=\"/update/3\""));
        assert!(html.contains("action=\"/add\""));
    }

    #[rstest]
    fn list_page_escapes_stored_values() {
        let html = list_page(&[contact("<script>alert(1)</script>")], &FormView::default());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[rstest]
    fn edit_page_prefills_values_and_errors() {
        let rejected = ContactForm {
            name: Some("Alice".to_owned()),
            phone: Some("5551234567".to_owned()),
            email: Some("not-an-email".to_owned()),
            kind: Some("Business".to_owned()),
            submit: Some("Update".to_owned()),
        }
        .validate()
        .expect_err("email is malformed");

        let html = edit_page(
            ContactId::new(3),
            &FormView::new(rejected.values, rejected.errors),
        );

        assert!(html.contains("action=\"/update/3\""));
        assert!(html.contains("value=\"not-an-email\""));
        assert!(html.contains("<span class=\"error\">Invalid email address.</span>\n</p>"));
        assert!(html.contains("name=\"submit\" value=\"Update\"></p>\n</form>"));
    }
}
