//! Utility functions for Lapacho.

use arboard::Clipboard;

use crate::content::ContactPage;
use crate::error::Result;

/// Copy the firm's contact card to the clipboard as plain text.
pub fn copy_contact_card(contact: &ContactPage) -> Result<()> {
    let text = format_contact_card(contact);

    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Render the contact card as the text placed on the clipboard.
pub fn format_contact_card(contact: &ContactPage) -> String {
    let mut text = format!("{}\n", contact.title);
    text.push_str(&"=".repeat(40));
    text.push('\n');
    text.push_str(&format!("Email:   {}\n", contact.email));
    text.push_str(&format!("Phone:   {}\n", contact.phone));
    text.push_str(&format!("Address: {}\n", contact.address));
    text
}
