//! Contact form kinds: the acknowledgement to the sender and the copy for
//! site admins

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::locale::LocaleTable;

use super::localized::{BuildContext, LocalizedBuilder, Messages, Phrase, Sections};
use super::registry::BuilderRegistry;

pub const CONTACT_FORM_RECEIVED: &str = "contact-form-received";
pub const CONTACT_FORM_ADMIN: &str = "contact-form-admin";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

pub(super) fn register(registry: &mut BuilderRegistry) {
    registry.register(LocalizedBuilder::new(CONTACT_FORM_RECEIVED, &RECEIVED, sender_sections));
    registry.register(LocalizedBuilder::new(CONTACT_FORM_ADMIN, &ADMIN, admin_sections));
}

/// Echo the message back to whoever sent it
fn sender_sections(p: &ContactPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        recipient: Some(p.name.clone()),
        ..Default::default()
    };
    sections.optional_detail(ctx.labels.message, p.subject.clone());
    sections.notes.push(p.message.clone());
    sections
}

fn admin_sections(p: &ContactPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        entity: Some(p.name.clone()),
        action_url: Some(format!("mailto:{}", p.email)),
        ..Default::default()
    };
    sections.detail(ctx.labels.participant, p.name.clone());
    sections.detail(ctx.labels.email, p.email.clone());
    sections.optional_detail(ctx.labels.message, p.subject.clone());
    sections.notes.push(p.message.clone());
    sections
}

lazy_static! {
    static ref RECEIVED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Text("We have received your message"),
        heading: Phrase::Text("Thanks for getting in touch"),
        intro: Phrase::Text("We have received your message and will reply as soon as possible. Here is a copy for your records:"),
        action: None,
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Text("Мы получили ваше сообщение"),
        heading: Phrase::Text("Спасибо, что написали нам"),
        intro: Phrase::Text("Мы получили ваше сообщение и ответим как можно скорее. Копия вашего сообщения:"),
        action: None,
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Text("Ми отримали ваше повідомлення"),
        heading: Phrase::Text("Дякуємо, що написали нам"),
        intro: Phrase::Text("Ми отримали ваше повідомлення і відповімо якнайшвидше. Копія вашого повідомлення:"),
        action: None,
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Text("Hemos recibido tu mensaje"),
        heading: Phrase::Text("Gracias por escribirnos"),
        intro: Phrase::Text("Hemos recibido tu mensaje y te responderemos lo antes posible. Aquí tienes una copia:"),
        action: None,
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Text("Nous avons bien reçu votre message"),
        heading: Phrase::Text("Merci de nous avoir contactés"),
        intro: Phrase::Text("Nous avons bien reçu votre message et vous répondrons dès que possible. En voici une copie :"),
        action: None,
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Text("Wir haben deine Nachricht erhalten"),
        heading: Phrase::Text("Danke für deine Nachricht"),
        intro: Phrase::Text("Wir haben deine Nachricht erhalten und antworten so bald wie möglich. Hier eine Kopie:"),
        action: None,
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Text("Abbiamo ricevuto il tuo messaggio"),
        heading: Phrase::Text("Grazie per averci contattato"),
        intro: Phrase::Text("Abbiamo ricevuto il tuo messaggio e ti risponderemo il prima possibile. Eccone una copia per il tuo archivio:"),
        action: None,
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Text("Hem rebut el teu missatge"),
        heading: Phrase::Text("Gràcies per contactar amb nosaltres"),
        intro: Phrase::Text("Hem rebut el teu missatge i et respondrem tan aviat com puguem. Aquí en tens una còpia:"),
        action: None,
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Text("We hebben je bericht ontvangen"),
        heading: Phrase::Text("Bedankt voor je bericht"),
        intro: Phrase::Text("We hebben je bericht ontvangen en reageren zo snel mogelijk. Hier is een kopie voor je administratie:"),
        action: None,
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Text("Vi har modtaget din besked"),
        heading: Phrase::Text("Tak fordi du kontaktede os"),
        intro: Phrase::Text("Vi har modtaget din besked og svarer så hurtigt som muligt. Her er en kopi til dig:"),
        action: None,
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Text("Vi har tagit emot ditt meddelande"),
        heading: Phrase::Text("Tack för att du hörde av dig"),
        intro: Phrase::Text("Vi har tagit emot ditt meddelande och svarar så snart vi kan. Här är en kopia för din egen del:"),
        action: None,
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Text("Vi har mottatt meldingen din"),
        heading: Phrase::Text("Takk for at du tok kontakt"),
        intro: Phrase::Text("Vi har mottatt meldingen din og svarer så snart som mulig. Her er en kopi til deg:"),
        action: None,
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Text("لقد استلمنا رسالتك"),
        heading: Phrase::Text("شكراً لتواصلك معنا"),
        intro: Phrase::Text("لقد استلمنا رسالتك وسنرد عليك في أقرب وقت ممكن. إليك نسخة منها للاحتفاظ بها:"),
        action: None,
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Text("我们已收到您的留言"),
        heading: Phrase::Text("感谢您的联系"),
        intro: Phrase::Text("我们已收到您的留言，将尽快回复。以下是留言副本，供您留存："),
        action: None,
        outro: None,
    });

    static ref ADMIN: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|name| format!("New contact message from {name}")),
        heading: Phrase::Text("New contact form message"),
        intro: Phrase::Named(|name| format!("{name} sent a message through the contact form.")),
        action: Some("Reply"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|name| format!("Новое сообщение от {name}")),
        heading: Phrase::Text("Новое сообщение с формы обратной связи"),
        intro: Phrase::Named(|name| format!("{name} отправил(а) сообщение через форму обратной связи.")),
        action: Some("Ответить"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|name| format!("Nuevo mensaje de contacto de {name}")),
        heading: Phrase::Text("Nuevo mensaje del formulario de contacto"),
        intro: Phrase::Named(|name| format!("{name} ha enviado un mensaje a través del formulario de contacto.")),
        action: Some("Responder"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|name| format!("Нове повідомлення від {name}")),
        heading: Phrase::Text("Нове повідомлення з форми зворотного зв'язку"),
        intro: Phrase::Named(|name| format!("{name} надіслав(-ла) повідомлення через форму зворотного зв'язку.")),
        action: Some("Відповісти"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|name| format!("Nouveau message de {name}")),
        heading: Phrase::Text("Nouveau message du formulaire de contact"),
        intro: Phrase::Named(|name| format!("{name} a envoyé un message via le formulaire de contact.")),
        action: Some("Répondre"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|name| format!("Neue Kontaktnachricht von {name}")),
        heading: Phrase::Text("Neue Nachricht über das Kontaktformular"),
        intro: Phrase::Named(|name| format!("{name} hat eine Nachricht über das Kontaktformular gesendet.")),
        action: Some("Antworten"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|name| format!("Nuovo messaggio da {name}")),
        heading: Phrase::Text("Nuovo messaggio dal modulo di contatto"),
        intro: Phrase::Named(|name| format!("{name} ha inviato un messaggio tramite il modulo di contatto.")),
        action: Some("Rispondi"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|name| format!("Nou missatge de {name}")),
        heading: Phrase::Text("Nou missatge del formulari de contacte"),
        intro: Phrase::Named(|name| format!("{name} ha enviat un missatge a través del formulari de contacte.")),
        action: Some("Respondre"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|name| format!("Nieuw contactbericht van {name}")),
        heading: Phrase::Text("Nieuw bericht via het contactformulier"),
        intro: Phrase::Named(|name| format!("{name} heeft een bericht gestuurd via het contactformulier.")),
        action: Some("Beantwoorden"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|name| format!("Ny kontaktbesked fra {name}")),
        heading: Phrase::Text("Ny besked fra kontaktformularen"),
        intro: Phrase::Named(|name| format!("{name} har sendt en besked via kontaktformularen.")),
        action: Some("Svar"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|name| format!("Nytt kontaktmeddelande från {name}")),
        heading: Phrase::Text("Nytt meddelande via kontaktformuläret"),
        intro: Phrase::Named(|name| format!("{name} har skickat ett meddelande via kontaktformuläret.")),
        action: Some("Svara"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|name| format!("Ny kontaktmelding fra {name}")),
        heading: Phrase::Text("Ny melding fra kontaktskjemaet"),
        intro: Phrase::Named(|name| format!("{name} har sendt en melding via kontaktskjemaet.")),
        action: Some("Svar"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|name| format!("رسالة تواصل جديدة من {name}")),
        heading: Phrase::Text("رسالة جديدة من نموذج التواصل"),
        intro: Phrase::Named(|name| format!("أرسل {name} رسالة عبر نموذج التواصل.")),
        action: Some("رد"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|name| format!("来自{name}的新留言")),
        heading: Phrase::Text("联系表单新留言"),
        intro: Phrase::Named(|name| format!("{name}通过联系表单发送了一条留言。")),
        action: Some("回复"),
        outro: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ContentBuilder;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "name": "Ivy",
            "email": "ivy@example.com",
            "subject": "Parking",
            "message": "Is there parking at the venue?"
        })
    }

    #[test]
    fn test_admin_copy_links_reply() {
        let built = LocalizedBuilder::new(CONTACT_FORM_ADMIN, &ADMIN, admin_sections)
            .build(&sample(), "en")
            .unwrap();

        assert_eq!(
            built.subject.as_deref(),
            Some("New contact message from Ivy")
        );
        assert!(built.document.contains("mailto:ivy@example.com"));
        assert!(built.document.contains("Is there parking at the venue?"));
    }

    #[test]
    fn test_sender_copy() {
        let built = LocalizedBuilder::new(CONTACT_FORM_RECEIVED, &RECEIVED, sender_sections)
            .build(&sample(), "de")
            .unwrap();

        assert!(built.document.contains("Hallo Ivy!"));
        assert!(built.document.contains("Parking"));
    }

    #[test]
    fn test_message_is_required() {
        let mut payload = sample();
        payload.as_object_mut().unwrap().remove("message");

        let err = LocalizedBuilder::new(CONTACT_FORM_RECEIVED, &RECEIVED, sender_sections)
            .build(&payload, "en")
            .unwrap_err();
        assert!(err.to_string().contains("message"));
    }
}
