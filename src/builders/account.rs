//! Account kinds: onboarding, credential links and account status changes

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::locale::LocaleTable;

use super::localized::{
    BuildContext, LocalizedBuilder, Messages, Phrase, RecipientOnly, Sections,
};
use super::registry::BuilderRegistry;

pub const WELCOME: &str = "welcome";
pub const EMAIL_VERIFICATION: &str = "email-verification";
pub const PASSWORD_RESET: &str = "password-reset";
pub const PASSWORD_CHANGED: &str = "password-changed";
pub const EMAIL_CHANGED: &str = "email-changed";
pub const ACCOUNT_DEACTIVATED: &str = "account-deactivated";
pub const ACCOUNT_REACTIVATED: &str = "account-reactivated";

/// A one-time link; the email is pointless without it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPayload {
    pub user_name: Option<String>,
    pub action_url: String,
    pub expires_in_hours: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailChangedPayload {
    pub user_name: Option<String>,
    pub new_email: Option<String>,
    pub action_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeactivationPayload {
    pub user_name: Option<String>,
    pub reason: Option<String>,
    pub action_url: Option<String>,
}

pub(super) fn register(registry: &mut BuilderRegistry) {
    registry.register(LocalizedBuilder::new(WELCOME, &WELCOME_MESSAGES, recipient_sections));
    registry.register(LocalizedBuilder::new(EMAIL_VERIFICATION, &VERIFICATION, link_sections));
    registry.register(LocalizedBuilder::new(PASSWORD_RESET, &RESET, link_sections));
    registry.register(LocalizedBuilder::new(
        PASSWORD_CHANGED,
        &PASSWORD_CHANGED_MESSAGES,
        recipient_sections,
    ));
    registry.register(LocalizedBuilder::new(
        EMAIL_CHANGED,
        &EMAIL_CHANGED_MESSAGES,
        email_changed_sections,
    ));
    registry.register(LocalizedBuilder::new(
        ACCOUNT_DEACTIVATED,
        &DEACTIVATED,
        deactivated_sections,
    ));
    registry.register(LocalizedBuilder::new(
        ACCOUNT_REACTIVATED,
        &REACTIVATED,
        recipient_sections,
    ));
}

fn recipient_sections(p: &RecipientOnly, _ctx: &BuildContext<'_>) -> Sections {
    Sections {
        recipient: p.user_name.clone(),
        action_url: p.action_url.clone(),
        ..Default::default()
    }
}

fn link_sections(p: &LinkPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        recipient: p.user_name.clone(),
        action_url: Some(p.action_url.clone()),
        ..Default::default()
    };
    if let Some(hours) = p.expires_in_hours {
        sections.notes.push((ctx.labels.link_expires)(hours));
    }
    sections
}

fn email_changed_sections(p: &EmailChangedPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        recipient: p.user_name.clone(),
        action_url: p.action_url.clone(),
        ..Default::default()
    };
    sections.optional_detail(ctx.labels.email, p.new_email.clone());
    sections
}

fn deactivated_sections(p: &DeactivationPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        recipient: p.user_name.clone(),
        action_url: p.action_url.clone(),
        ..Default::default()
    };
    sections.optional_detail(ctx.labels.reason, p.reason.clone());
    sections
}

lazy_static! {
    static ref WELCOME_MESSAGES: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Text("Welcome to the tournament platform"),
        heading: Phrase::Text("Welcome aboard!"),
        intro: Phrase::Text("Your account is ready. You can now browse tournaments, register and follow results."),
        action: Some("Get started"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Text("Добро пожаловать на турнирную платформу"),
        heading: Phrase::Text("Добро пожаловать!"),
        intro: Phrase::Text("Ваш аккаунт готов. Теперь вы можете искать турниры, регистрироваться и следить за результатами."),
        action: Some("Начать"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Text("Ласкаво просимо на турнірну платформу"),
        heading: Phrase::Text("Ласкаво просимо!"),
        intro: Phrase::Text("Ваш обліковий запис готовий. Тепер ви можете шукати турніри, реєструватися та стежити за результатами."),
        action: Some("Почати"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Text("Bienvenido a la plataforma de torneos"),
        heading: Phrase::Text("¡Bienvenido!"),
        intro: Phrase::Text("Tu cuenta está lista. Ya puedes explorar torneos, inscribirte y seguir los resultados."),
        action: Some("Empezar"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Text("Bienvenue sur la plateforme de tournois"),
        heading: Phrase::Text("Bienvenue !"),
        intro: Phrase::Text("Votre compte est prêt. Vous pouvez désormais parcourir les tournois, vous inscrire et suivre les résultats."),
        action: Some("Commencer"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Text("Willkommen auf der Turnierplattform"),
        heading: Phrase::Text("Willkommen!"),
        intro: Phrase::Text("Dein Konto ist bereit. Du kannst jetzt Turniere entdecken, dich anmelden und Ergebnisse verfolgen."),
        action: Some("Loslegen"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Text("Benvenuto nella piattaforma dei tornei"),
        heading: Phrase::Text("Benvenuto!"),
        intro: Phrase::Text("Il tuo account è pronto. Ora puoi cercare tornei, iscriverti e seguire i risultati."),
        action: Some("Inizia"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Text("Benvingut a la plataforma de tornejos"),
        heading: Phrase::Text("Benvingut!"),
        intro: Phrase::Text("El teu compte està llest. Ara pots explorar tornejos, inscriure't i seguir els resultats."),
        action: Some("Comença"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Text("Welkom bij het toernooiplatform"),
        heading: Phrase::Text("Welkom!"),
        intro: Phrase::Text("Je account is klaar. Je kunt nu toernooien bekijken, je inschrijven en uitslagen volgen."),
        action: Some("Aan de slag"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Text("Velkommen til turneringsplatformen"),
        heading: Phrase::Text("Velkommen!"),
        intro: Phrase::Text("Din konto er klar. Du kan nu finde turneringer, tilmelde dig og følge resultater."),
        action: Some("Kom i gang"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Text("Välkommen till turneringsplattformen"),
        heading: Phrase::Text("Välkommen!"),
        intro: Phrase::Text("Ditt konto är klart. Nu kan du hitta turneringar, anmäla dig och följa resultat."),
        action: Some("Kom igång"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Text("Velkommen til turneringsplattformen"),
        heading: Phrase::Text("Velkommen!"),
        intro: Phrase::Text("Kontoen din er klar. Nå kan du finne turneringer, melde deg på og følge resultater."),
        action: Some("Kom i gang"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Text("مرحباً بك في منصة البطولات"),
        heading: Phrase::Text("أهلاً وسهلاً!"),
        intro: Phrase::Text("حسابك جاهز. يمكنك الآن تصفح البطولات والتسجيل ومتابعة النتائج."),
        action: Some("ابدأ الآن"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Text("欢迎加入赛事平台"),
        heading: Phrase::Text("欢迎！"),
        intro: Phrase::Text("您的账户已准备就绪。现在可以浏览赛事、报名并关注比赛结果。"),
        action: Some("开始使用"),
        outro: None,
    });

    static ref VERIFICATION: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Text("Confirm your email address"),
        heading: Phrase::Text("Confirm your email address"),
        intro: Phrase::Text("Please confirm your email address to activate your account."),
        action: Some("Confirm email"),
        outro: Some("If you did not create an account, you can ignore this email."),
    })
    .with("ru", Messages {
        subject: Phrase::Text("Подтвердите адрес электронной почты"),
        heading: Phrase::Text("Подтвердите адрес электронной почты"),
        intro: Phrase::Text("Пожалуйста, подтвердите адрес электронной почты, чтобы активировать аккаунт."),
        action: Some("Подтвердить email"),
        outro: Some("Если вы не создавали аккаунт, просто проигнорируйте это письмо."),
    })
    .with("ua", Messages {
        subject: Phrase::Text("Підтвердьте адресу електронної пошти"),
        heading: Phrase::Text("Підтвердьте адресу електронної пошти"),
        intro: Phrase::Text("Будь ласка, підтвердьте адресу електронної пошти, щоб активувати обліковий запис."),
        action: Some("Підтвердити email"),
        outro: Some("Якщо ви не створювали обліковий запис, просто проігноруйте цей лист."),
    })
    .with("es", Messages {
        subject: Phrase::Text("Confirma tu dirección de correo"),
        heading: Phrase::Text("Confirma tu dirección de correo"),
        intro: Phrase::Text("Confirma tu correo electrónico para activar tu cuenta."),
        action: Some("Confirmar correo"),
        outro: Some("Si no has creado una cuenta, puedes ignorar este mensaje."),
    })
    .with("fr", Messages {
        subject: Phrase::Text("Confirmez votre adresse e-mail"),
        heading: Phrase::Text("Confirmez votre adresse e-mail"),
        intro: Phrase::Text("Veuillez confirmer votre adresse e-mail pour activer votre compte."),
        action: Some("Confirmer l'e-mail"),
        outro: Some("Si vous n'avez pas créé de compte, ignorez cet e-mail."),
    })
    .with("de", Messages {
        subject: Phrase::Text("Bestätige deine E-Mail-Adresse"),
        heading: Phrase::Text("Bestätige deine E-Mail-Adresse"),
        intro: Phrase::Text("Bitte bestätige deine E-Mail-Adresse, um dein Konto zu aktivieren."),
        action: Some("E-Mail bestätigen"),
        outro: Some("Falls du kein Konto erstellt hast, kannst du diese E-Mail ignorieren."),
    })
    .with("it", Messages {
        subject: Phrase::Text("Conferma il tuo indirizzo email"),
        heading: Phrase::Text("Conferma il tuo indirizzo email"),
        intro: Phrase::Text("Conferma il tuo indirizzo email per attivare l'account."),
        action: Some("Conferma email"),
        outro: Some("Se non hai creato un account, ignora questa email."),
    })
    .with("ca", Messages {
        subject: Phrase::Text("Confirma la teva adreça electrònica"),
        heading: Phrase::Text("Confirma la teva adreça electrònica"),
        intro: Phrase::Text("Confirma la teva adreça electrònica per activar el compte."),
        action: Some("Confirma el correu"),
        outro: Some("Si no has creat cap compte, pots ignorar aquest correu."),
    })
    .with("nl", Messages {
        subject: Phrase::Text("Bevestig je e-mailadres"),
        heading: Phrase::Text("Bevestig je e-mailadres"),
        intro: Phrase::Text("Bevestig je e-mailadres om je account te activeren."),
        action: Some("E-mailadres bevestigen"),
        outro: Some("Heb je geen account aangemaakt? Dan kun je deze e-mail negeren."),
    })
    .with("da", Messages {
        subject: Phrase::Text("Bekræft din e-mailadresse"),
        heading: Phrase::Text("Bekræft din e-mailadresse"),
        intro: Phrase::Text("Bekræft din e-mailadresse for at aktivere din konto."),
        action: Some("Bekræft e-mail"),
        outro: Some("Har du ikke oprettet en konto, kan du se bort fra denne e-mail."),
    })
    .with("sv", Messages {
        subject: Phrase::Text("Bekräfta din e-postadress"),
        heading: Phrase::Text("Bekräfta din e-postadress"),
        intro: Phrase::Text("Bekräfta din e-postadress för att aktivera ditt konto."),
        action: Some("Bekräfta e-post"),
        outro: Some("Om du inte har skapat något konto kan du bortse från detta mejl."),
    })
    .with("no", Messages {
        subject: Phrase::Text("Bekreft e-postadressen din"),
        heading: Phrase::Text("Bekreft e-postadressen din"),
        intro: Phrase::Text("Bekreft e-postadressen din for å aktivere kontoen."),
        action: Some("Bekreft e-post"),
        outro: Some("Hvis du ikke har opprettet en konto, kan du se bort fra denne e-posten."),
    })
    .with("ar", Messages {
        subject: Phrase::Text("أكد عنوان بريدك الإلكتروني"),
        heading: Phrase::Text("أكد عنوان بريدك الإلكتروني"),
        intro: Phrase::Text("يرجى تأكيد عنوان بريدك الإلكتروني لتفعيل حسابك."),
        action: Some("تأكيد البريد"),
        outro: Some("إذا لم تقم بإنشاء حساب، يمكنك تجاهل هذه الرسالة."),
    })
    .with("zh", Messages {
        subject: Phrase::Text("请验证您的邮箱地址"),
        heading: Phrase::Text("请验证您的邮箱地址"),
        intro: Phrase::Text("请验证您的邮箱地址以激活账户。"),
        action: Some("验证邮箱"),
        outro: Some("如果您没有注册账户，请忽略此邮件。"),
    });

    static ref RESET: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Text("Reset your password"),
        heading: Phrase::Text("Reset your password"),
        intro: Phrase::Text("We received a request to reset the password for your account."),
        action: Some("Reset password"),
        outro: Some("If you did not request this, you can safely ignore this email."),
    })
    .with("ru", Messages {
        subject: Phrase::Text("Сброс пароля"),
        heading: Phrase::Text("Сброс пароля"),
        intro: Phrase::Text("Мы получили запрос на сброс пароля для вашего аккаунта."),
        action: Some("Сбросить пароль"),
        outro: Some("Если вы не отправляли этот запрос, просто проигнорируйте письмо."),
    })
    .with("ua", Messages {
        subject: Phrase::Text("Скидання пароля"),
        heading: Phrase::Text("Скидання пароля"),
        intro: Phrase::Text("Ми отримали запит на скидання пароля для вашого облікового запису."),
        action: Some("Скинути пароль"),
        outro: Some("Якщо ви не надсилали цей запит, просто проігноруйте лист."),
    })
    .with("es", Messages {
        subject: Phrase::Text("Restablece tu contraseña"),
        heading: Phrase::Text("Restablece tu contraseña"),
        intro: Phrase::Text("Hemos recibido una solicitud para restablecer la contraseña de tu cuenta."),
        action: Some("Restablecer contraseña"),
        outro: Some("Si no lo has solicitado, puedes ignorar este mensaje."),
    })
    .with("fr", Messages {
        subject: Phrase::Text("Réinitialisez votre mot de passe"),
        heading: Phrase::Text("Réinitialisez votre mot de passe"),
        intro: Phrase::Text("Nous avons reçu une demande de réinitialisation du mot de passe de votre compte."),
        action: Some("Réinitialiser le mot de passe"),
        outro: Some("Si vous n'êtes pas à l'origine de cette demande, ignorez cet e-mail."),
    })
    .with("de", Messages {
        subject: Phrase::Text("Passwort zurücksetzen"),
        heading: Phrase::Text("Passwort zurücksetzen"),
        intro: Phrase::Text("Wir haben eine Anfrage zum Zurücksetzen deines Passworts erhalten."),
        action: Some("Passwort zurücksetzen"),
        outro: Some("Falls du das nicht angefordert hast, kannst du diese E-Mail ignorieren."),
    })
    .with("it", Messages {
        subject: Phrase::Text("Reimposta la password"),
        heading: Phrase::Text("Reimposta la password"),
        intro: Phrase::Text("Abbiamo ricevuto una richiesta di reimpostazione della password del tuo account."),
        action: Some("Reimposta password"),
        outro: Some("Se non hai fatto questa richiesta, ignora questa email."),
    })
    .with("ca", Messages {
        subject: Phrase::Text("Restableix la contrasenya"),
        heading: Phrase::Text("Restableix la contrasenya"),
        intro: Phrase::Text("Hem rebut una sol·licitud per restablir la contrasenya del teu compte."),
        action: Some("Restableix la contrasenya"),
        outro: Some("Si no ho has sol·licitat, pots ignorar aquest correu."),
    })
    .with("nl", Messages {
        subject: Phrase::Text("Wachtwoord opnieuw instellen"),
        heading: Phrase::Text("Wachtwoord opnieuw instellen"),
        intro: Phrase::Text("We hebben een verzoek ontvangen om het wachtwoord van je account opnieuw in te stellen."),
        action: Some("Wachtwoord opnieuw instellen"),
        outro: Some("Heb je dit niet aangevraagd? Dan kun je deze e-mail negeren."),
    })
    .with("da", Messages {
        subject: Phrase::Text("Nulstil din adgangskode"),
        heading: Phrase::Text("Nulstil din adgangskode"),
        intro: Phrase::Text("Vi har modtaget en anmodning om at nulstille adgangskoden til din konto."),
        action: Some("Nulstil adgangskode"),
        outro: Some("Har du ikke bedt om dette, kan du se bort fra denne e-mail."),
    })
    .with("sv", Messages {
        subject: Phrase::Text("Återställ ditt lösenord"),
        heading: Phrase::Text("Återställ ditt lösenord"),
        intro: Phrase::Text("Vi har fått en begäran om att återställa lösenordet för ditt konto."),
        action: Some("Återställ lösenord"),
        outro: Some("Om du inte har begärt detta kan du bortse från mejlet."),
    })
    .with("no", Messages {
        subject: Phrase::Text("Tilbakestill passordet ditt"),
        heading: Phrase::Text("Tilbakestill passordet ditt"),
        intro: Phrase::Text("Vi har mottatt en forespørsel om å tilbakestille passordet til kontoen din."),
        action: Some("Tilbakestill passord"),
        outro: Some("Hvis du ikke ba om dette, kan du se bort fra denne e-posten."),
    })
    .with("ar", Messages {
        subject: Phrase::Text("إعادة تعيين كلمة المرور"),
        heading: Phrase::Text("إعادة تعيين كلمة المرور"),
        intro: Phrase::Text("تلقينا طلباً لإعادة تعيين كلمة المرور الخاصة بحسابك."),
        action: Some("إعادة تعيين كلمة المرور"),
        outro: Some("إذا لم تطلب ذلك، يمكنك تجاهل هذه الرسالة."),
    })
    .with("zh", Messages {
        subject: Phrase::Text("重置您的密码"),
        heading: Phrase::Text("重置您的密码"),
        intro: Phrase::Text("我们收到了重置您账户密码的请求。"),
        action: Some("重置密码"),
        outro: Some("如果这不是您本人的操作，请忽略此邮件。"),
    });

    static ref PASSWORD_CHANGED_MESSAGES: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Text("Your password was changed"),
        heading: Phrase::Text("Your password was changed"),
        intro: Phrase::Text("The password for your account was changed just now."),
        action: Some("Secure my account"),
        outro: Some("If this was not you, reset your password immediately and contact us."),
    })
    .with("ru", Messages {
        subject: Phrase::Text("Ваш пароль изменён"),
        heading: Phrase::Text("Ваш пароль изменён"),
        intro: Phrase::Text("Пароль вашего аккаунта только что был изменён."),
        action: Some("Защитить аккаунт"),
        outro: Some("Если это были не вы, немедленно сбросьте пароль и свяжитесь с нами."),
    })
    .with("ua", Messages {
        subject: Phrase::Text("Ваш пароль змінено"),
        heading: Phrase::Text("Ваш пароль змінено"),
        intro: Phrase::Text("Пароль вашого облікового запису щойно було змінено."),
        action: Some("Захистити обліковий запис"),
        outro: Some("Якщо це були не ви, негайно скиньте пароль і зв'яжіться з нами."),
    })
    .with("es", Messages {
        subject: Phrase::Text("Tu contraseña ha cambiado"),
        heading: Phrase::Text("Tu contraseña ha cambiado"),
        intro: Phrase::Text("La contraseña de tu cuenta se acaba de cambiar."),
        action: Some("Proteger mi cuenta"),
        outro: Some("Si no has sido tú, restablece tu contraseña de inmediato y contáctanos."),
    })
    .with("fr", Messages {
        subject: Phrase::Text("Votre mot de passe a été modifié"),
        heading: Phrase::Text("Votre mot de passe a été modifié"),
        intro: Phrase::Text("Le mot de passe de votre compte vient d'être modifié."),
        action: Some("Sécuriser mon compte"),
        outro: Some("Si ce n'était pas vous, réinitialisez immédiatement votre mot de passe et contactez-nous."),
    })
    .with("de", Messages {
        subject: Phrase::Text("Dein Passwort wurde geändert"),
        heading: Phrase::Text("Dein Passwort wurde geändert"),
        intro: Phrase::Text("Das Passwort für dein Konto wurde soeben geändert."),
        action: Some("Konto absichern"),
        outro: Some("Wenn du das nicht warst, setze sofort dein Passwort zurück und kontaktiere uns."),
    })
    .with("it", Messages {
        subject: Phrase::Text("La tua password è stata modificata"),
        heading: Phrase::Text("La tua password è stata modificata"),
        intro: Phrase::Text("La password del tuo account è stata appena modificata."),
        action: Some("Proteggi il mio account"),
        outro: Some("Se non sei stato tu, reimposta subito la password e contattaci."),
    })
    .with("ca", Messages {
        subject: Phrase::Text("S'ha canviat la teva contrasenya"),
        heading: Phrase::Text("S'ha canviat la teva contrasenya"),
        intro: Phrase::Text("La contrasenya del teu compte s'acaba de canviar."),
        action: Some("Protegir el meu compte"),
        outro: Some("Si no has estat tu, restableix la contrasenya immediatament i contacta amb nosaltres."),
    })
    .with("nl", Messages {
        subject: Phrase::Text("Je wachtwoord is gewijzigd"),
        heading: Phrase::Text("Je wachtwoord is gewijzigd"),
        intro: Phrase::Text("Het wachtwoord van je account is zojuist gewijzigd."),
        action: Some("Mijn account beveiligen"),
        outro: Some("Was jij dit niet? Stel dan direct je wachtwoord opnieuw in en neem contact met ons op."),
    })
    .with("da", Messages {
        subject: Phrase::Text("Din adgangskode er ændret"),
        heading: Phrase::Text("Din adgangskode er ændret"),
        intro: Phrase::Text("Adgangskoden til din konto er netop blevet ændret."),
        action: Some("Beskyt min konto"),
        outro: Some("Hvis det ikke var dig, så nulstil din adgangskode med det samme og kontakt os."),
    })
    .with("sv", Messages {
        subject: Phrase::Text("Ditt lösenord har ändrats"),
        heading: Phrase::Text("Ditt lösenord har ändrats"),
        intro: Phrase::Text("Lösenordet för ditt konto ändrades nyss."),
        action: Some("Skydda mitt konto"),
        outro: Some("Om det inte var du, återställ lösenordet direkt och kontakta oss."),
    })
    .with("no", Messages {
        subject: Phrase::Text("Passordet ditt er endret"),
        heading: Phrase::Text("Passordet ditt er endret"),
        intro: Phrase::Text("Passordet for kontoen din ble nettopp endret."),
        action: Some("Sikre kontoen min"),
        outro: Some("Hvis det ikke var deg, tilbakestill passordet med en gang og kontakt oss."),
    })
    .with("ar", Messages {
        subject: Phrase::Text("تم تغيير كلمة المرور"),
        heading: Phrase::Text("تم تغيير كلمة المرور"),
        intro: Phrase::Text("تم تغيير كلمة مرور حسابك للتو."),
        action: Some("تأمين حسابي"),
        outro: Some("إذا لم تكن أنت من قام بذلك، فأعد تعيين كلمة المرور فوراً وتواصل معنا."),
    })
    .with("zh", Messages {
        subject: Phrase::Text("您的密码已更改"),
        heading: Phrase::Text("您的密码已更改"),
        intro: Phrase::Text("您账户的密码刚刚已更改。"),
        action: Some("保护我的账户"),
        outro: Some("如果这不是您本人操作，请立即重置密码并联系我们。"),
    });

    static ref EMAIL_CHANGED_MESSAGES: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Text("Your email address was changed"),
        heading: Phrase::Text("Your email address was changed"),
        intro: Phrase::Text("The email address on your account has been updated."),
        action: None,
        outro: Some("If you did not make this change, contact us right away."),
    })
    .with("ru", Messages {
        subject: Phrase::Text("Адрес электронной почты изменён"),
        heading: Phrase::Text("Адрес электронной почты изменён"),
        intro: Phrase::Text("Адрес электронной почты вашего аккаунта обновлён."),
        action: None,
        outro: Some("Если вы не вносили это изменение, срочно свяжитесь с нами."),
    })
    .with("ua", Messages {
        subject: Phrase::Text("Адресу електронної пошти змінено"),
        heading: Phrase::Text("Адресу електронної пошти змінено"),
        intro: Phrase::Text("Адресу електронної пошти вашого облікового запису оновлено."),
        action: None,
        outro: Some("Якщо ви не вносили цю зміну, негайно зв'яжіться з нами."),
    })
    .with("es", Messages {
        subject: Phrase::Text("Tu correo electrónico ha cambiado"),
        heading: Phrase::Text("Tu correo electrónico ha cambiado"),
        intro: Phrase::Text("Se ha actualizado la dirección de correo de tu cuenta."),
        action: None,
        outro: Some("Si no has hecho este cambio, contáctanos de inmediato."),
    })
    .with("fr", Messages {
        subject: Phrase::Text("Votre adresse e-mail a été modifiée"),
        heading: Phrase::Text("Votre adresse e-mail a été modifiée"),
        intro: Phrase::Text("L'adresse e-mail de votre compte a été mise à jour."),
        action: None,
        outro: Some("Si vous n'êtes pas à l'origine de ce changement, contactez-nous immédiatement."),
    })
    .with("de", Messages {
        subject: Phrase::Text("Deine E-Mail-Adresse wurde geändert"),
        heading: Phrase::Text("Deine E-Mail-Adresse wurde geändert"),
        intro: Phrase::Text("Die E-Mail-Adresse deines Kontos wurde aktualisiert."),
        action: None,
        outro: Some("Wenn du diese Änderung nicht vorgenommen hast, kontaktiere uns bitte sofort."),
    })
    .with("it", Messages {
        subject: Phrase::Text("Il tuo indirizzo email è stato modificato"),
        heading: Phrase::Text("Il tuo indirizzo email è stato modificato"),
        intro: Phrase::Text("L'indirizzo email del tuo account è stato aggiornato."),
        action: None,
        outro: Some("Se non hai effettuato tu questa modifica, contattaci subito."),
    })
    .with("ca", Messages {
        subject: Phrase::Text("S'ha canviat la teva adreça electrònica"),
        heading: Phrase::Text("S'ha canviat la teva adreça electrònica"),
        intro: Phrase::Text("L'adreça electrònica del teu compte s'ha actualitzat."),
        action: None,
        outro: Some("Si no has fet aquest canvi, contacta amb nosaltres de seguida."),
    })
    .with("nl", Messages {
        subject: Phrase::Text("Je e-mailadres is gewijzigd"),
        heading: Phrase::Text("Je e-mailadres is gewijzigd"),
        intro: Phrase::Text("Het e-mailadres van je account is bijgewerkt."),
        action: None,
        outro: Some("Heb je deze wijziging niet zelf gedaan? Neem dan meteen contact met ons op."),
    })
    .with("da", Messages {
        subject: Phrase::Text("Din e-mailadresse er ændret"),
        heading: Phrase::Text("Din e-mailadresse er ændret"),
        intro: Phrase::Text("E-mailadressen på din konto er blevet opdateret."),
        action: None,
        outro: Some("Hvis du ikke har foretaget denne ændring, så kontakt os med det samme."),
    })
    .with("sv", Messages {
        subject: Phrase::Text("Din e-postadress har ändrats"),
        heading: Phrase::Text("Din e-postadress har ändrats"),
        intro: Phrase::Text("E-postadressen för ditt konto har uppdaterats."),
        action: None,
        outro: Some("Om du inte gjorde den här ändringen, kontakta oss omedelbart."),
    })
    .with("no", Messages {
        subject: Phrase::Text("E-postadressen din er endret"),
        heading: Phrase::Text("E-postadressen din er endret"),
        intro: Phrase::Text("E-postadressen på kontoen din er oppdatert."),
        action: None,
        outro: Some("Hvis du ikke gjorde denne endringen, kontakt oss med en gang."),
    })
    .with("ar", Messages {
        subject: Phrase::Text("تم تغيير بريدك الإلكتروني"),
        heading: Phrase::Text("تم تغيير بريدك الإلكتروني"),
        intro: Phrase::Text("تم تحديث البريد الإلكتروني المرتبط بحسابك."),
        action: None,
        outro: Some("إذا لم تقم بهذا التغيير، فتواصل معنا فوراً."),
    })
    .with("zh", Messages {
        subject: Phrase::Text("您的邮箱地址已更改"),
        heading: Phrase::Text("您的邮箱地址已更改"),
        intro: Phrase::Text("您账户的邮箱地址已更新。"),
        action: None,
        outro: Some("如果这不是您本人的操作，请立即联系我们。"),
    });

    static ref DEACTIVATED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Text("Your account has been deactivated"),
        heading: Phrase::Text("Account deactivated"),
        intro: Phrase::Text("Your account has been deactivated and you can no longer sign in."),
        action: Some("Contact support"),
        outro: Some("You can ask us to reactivate it at any time."),
    })
    .with("ru", Messages {
        subject: Phrase::Text("Ваш аккаунт деактивирован"),
        heading: Phrase::Text("Аккаунт деактивирован"),
        intro: Phrase::Text("Ваш аккаунт деактивирован, вход в него больше невозможен."),
        action: Some("Связаться с поддержкой"),
        outro: Some("Вы можете попросить нас восстановить его в любое время."),
    })
    .with("ua", Messages {
        subject: Phrase::Text("Ваш обліковий запис деактивовано"),
        heading: Phrase::Text("Обліковий запис деактивовано"),
        intro: Phrase::Text("Ваш обліковий запис деактивовано, вхід до нього більше неможливий."),
        action: Some("Зв'язатися з підтримкою"),
        outro: Some("Ви можете попросити нас відновити його будь-коли."),
    })
    .with("es", Messages {
        subject: Phrase::Text("Tu cuenta ha sido desactivada"),
        heading: Phrase::Text("Cuenta desactivada"),
        intro: Phrase::Text("Tu cuenta ha sido desactivada y ya no puedes iniciar sesión."),
        action: Some("Contactar con soporte"),
        outro: Some("Puedes pedirnos que la reactivemos en cualquier momento."),
    })
    .with("fr", Messages {
        subject: Phrase::Text("Votre compte a été désactivé"),
        heading: Phrase::Text("Compte désactivé"),
        intro: Phrase::Text("Votre compte a été désactivé et vous ne pouvez plus vous connecter."),
        action: Some("Contacter le support"),
        outro: Some("Vous pouvez nous demander de le réactiver à tout moment."),
    })
    .with("de", Messages {
        subject: Phrase::Text("Dein Konto wurde deaktiviert"),
        heading: Phrase::Text("Konto deaktiviert"),
        intro: Phrase::Text("Dein Konto wurde deaktiviert, du kannst dich nicht mehr anmelden."),
        action: Some("Support kontaktieren"),
        outro: Some("Du kannst uns jederzeit bitten, es wieder zu aktivieren."),
    })
    .with("it", Messages {
        subject: Phrase::Text("Il tuo account è stato disattivato"),
        heading: Phrase::Text("Account disattivato"),
        intro: Phrase::Text("Il tuo account è stato disattivato e non puoi più accedere."),
        action: Some("Contatta l'assistenza"),
        outro: Some("Puoi chiederci di riattivarlo in qualsiasi momento."),
    })
    .with("ca", Messages {
        subject: Phrase::Text("El teu compte s'ha desactivat"),
        heading: Phrase::Text("Compte desactivat"),
        intro: Phrase::Text("El teu compte s'ha desactivat i ja no hi pots iniciar sessió."),
        action: Some("Contactar amb el suport"),
        outro: Some("Ens pots demanar que el reactivem en qualsevol moment."),
    })
    .with("nl", Messages {
        subject: Phrase::Text("Je account is gedeactiveerd"),
        heading: Phrase::Text("Account gedeactiveerd"),
        intro: Phrase::Text("Je account is gedeactiveerd en je kunt niet meer inloggen."),
        action: Some("Contact opnemen met support"),
        outro: Some("Je kunt ons altijd vragen het weer te activeren."),
    })
    .with("da", Messages {
        subject: Phrase::Text("Din konto er deaktiveret"),
        heading: Phrase::Text("Konto deaktiveret"),
        intro: Phrase::Text("Din konto er deaktiveret, og du kan ikke længere logge ind."),
        action: Some("Kontakt support"),
        outro: Some("Du kan til enhver tid bede os om at genaktivere den."),
    })
    .with("sv", Messages {
        subject: Phrase::Text("Ditt konto har inaktiverats"),
        heading: Phrase::Text("Kontot inaktiverat"),
        intro: Phrase::Text("Ditt konto har inaktiverats och du kan inte längre logga in."),
        action: Some("Kontakta supporten"),
        outro: Some("Du kan när som helst be oss att återaktivera det."),
    })
    .with("no", Messages {
        subject: Phrase::Text("Kontoen din er deaktivert"),
        heading: Phrase::Text("Konto deaktivert"),
        intro: Phrase::Text("Kontoen din er deaktivert, og du kan ikke lenger logge inn."),
        action: Some("Kontakt brukerstøtte"),
        outro: Some("Du kan når som helst be oss om å aktivere den igjen."),
    })
    .with("ar", Messages {
        subject: Phrase::Text("تم تعطيل حسابك"),
        heading: Phrase::Text("الحساب معطّل"),
        intro: Phrase::Text("تم تعطيل حسابك ولم يعد بإمكانك تسجيل الدخول."),
        action: Some("التواصل مع الدعم"),
        outro: Some("يمكنك أن تطلب منا إعادة تفعيله في أي وقت."),
    })
    .with("zh", Messages {
        subject: Phrase::Text("您的账户已停用"),
        heading: Phrase::Text("账户已停用"),
        intro: Phrase::Text("您的账户已停用，您将无法再登录。"),
        action: Some("联系客服"),
        outro: Some("您可以随时请求我们重新启用账户。"),
    });

    static ref REACTIVATED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Text("Your account is active again"),
        heading: Phrase::Text("Welcome back!"),
        intro: Phrase::Text("Your account has been reactivated. You can sign in again as usual."),
        action: Some("Sign in"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Text("Ваш аккаунт снова активен"),
        heading: Phrase::Text("С возвращением!"),
        intro: Phrase::Text("Ваш аккаунт восстановлен. Вы снова можете входить как обычно."),
        action: Some("Войти"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Text("Ваш обліковий запис знову активний"),
        heading: Phrase::Text("З поверненням!"),
        intro: Phrase::Text("Ваш обліковий запис відновлено. Ви знову можете входити як зазвичай."),
        action: Some("Увійти"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Text("Tu cuenta vuelve a estar activa"),
        heading: Phrase::Text("¡Bienvenido de nuevo!"),
        intro: Phrase::Text("Tu cuenta ha sido reactivada. Ya puedes iniciar sesión como siempre."),
        action: Some("Iniciar sesión"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Text("Votre compte est de nouveau actif"),
        heading: Phrase::Text("Bon retour parmi nous !"),
        intro: Phrase::Text("Votre compte a été réactivé. Vous pouvez à nouveau vous connecter normalement."),
        action: Some("Se connecter"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Text("Dein Konto ist wieder aktiv"),
        heading: Phrase::Text("Willkommen zurück!"),
        intro: Phrase::Text("Dein Konto wurde reaktiviert. Du kannst dich wie gewohnt wieder anmelden."),
        action: Some("Anmelden"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Text("Il tuo account è di nuovo attivo"),
        heading: Phrase::Text("Bentornato!"),
        intro: Phrase::Text("Il tuo account è stato riattivato. Puoi accedere di nuovo come sempre."),
        action: Some("Accedi"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Text("El teu compte torna a estar actiu"),
        heading: Phrase::Text("Et donem la benvinguda de nou!"),
        intro: Phrase::Text("El teu compte s'ha reactivat. Ja pots tornar a iniciar sessió com sempre."),
        action: Some("Inicia sessió"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Text("Je account is weer actief"),
        heading: Phrase::Text("Welkom terug!"),
        intro: Phrase::Text("Je account is opnieuw geactiveerd. Je kunt weer gewoon inloggen."),
        action: Some("Inloggen"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Text("Din konto er aktiv igen"),
        heading: Phrase::Text("Velkommen tilbage!"),
        intro: Phrase::Text("Din konto er genaktiveret. Du kan logge ind igen som normalt."),
        action: Some("Log ind"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Text("Ditt konto är aktivt igen"),
        heading: Phrase::Text("Välkommen tillbaka!"),
        intro: Phrase::Text("Ditt konto har återaktiverats. Du kan logga in som vanligt igen."),
        action: Some("Logga in"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Text("Kontoen din er aktiv igjen"),
        heading: Phrase::Text("Velkommen tilbake!"),
        intro: Phrase::Text("Kontoen din er aktivert igjen. Du kan logge inn som vanlig."),
        action: Some("Logg inn"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Text("حسابك نشط من جديد"),
        heading: Phrase::Text("مرحباً بعودتك!"),
        intro: Phrase::Text("تمت إعادة تفعيل حسابك. يمكنك تسجيل الدخول كالمعتاد."),
        action: Some("تسجيل الدخول"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Text("您的账户已重新启用"),
        heading: Phrase::Text("欢迎回来！"),
        intro: Phrase::Text("您的账户已重新启用。您可以像往常一样登录。"),
        action: Some("登录"),
        outro: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ContentBuilder;
    use serde_json::json;

    #[test]
    fn test_password_reset_link_and_expiry() {
        let payload = json!({
            "userName": "Lena",
            "actionUrl": "https://example.com/reset?token=abc",
            "expiresInHours": 2
        });

        let built = LocalizedBuilder::new(PASSWORD_RESET, &RESET, link_sections)
            .build(&payload, "sv")
            .unwrap();

        assert_eq!(built.subject.as_deref(), Some("Återställ ditt lösenord"));
        assert!(built.document.contains("Hej Lena!"));
        assert!(built.document.contains("https://example.com/reset?token=abc"));
        assert!(built.document.contains("Länken upphör att gälla om 2 timmar."));
    }

    #[test]
    fn test_link_is_required() {
        let err = LocalizedBuilder::new(EMAIL_VERIFICATION, &VERIFICATION, link_sections)
            .build(&json!({"userName": "Lena"}), "en")
            .unwrap_err();

        assert!(err.to_string().contains("actionUrl"));
    }

    #[test]
    fn test_welcome_without_name_uses_generic_greeting() {
        let built = LocalizedBuilder::new(WELCOME, &WELCOME_MESSAGES, recipient_sections)
            .build(&json!({}), "en")
            .unwrap();

        assert!(built.document.contains("Hello!"));
        assert!(!built.document.contains("class=\"button\""));
    }

    #[test]
    fn test_email_changed_shows_new_address() {
        let built = LocalizedBuilder::new(EMAIL_CHANGED, &EMAIL_CHANGED_MESSAGES, email_changed_sections)
            .build(&json!({"newEmail": "new@example.com"}), "es")
            .unwrap();

        assert!(built.document.contains("new@example.com"));
        assert_eq!(
            built.subject.as_deref(),
            Some("Tu correo electrónico ha cambiado")
        );
    }

    #[test]
    fn test_rtl_document_for_arabic() {
        let payload = json!({"actionUrl": "https://example.com/verify"});
        let built = LocalizedBuilder::new(EMAIL_VERIFICATION, &VERIFICATION, link_sections)
            .build(&payload, "ar")
            .unwrap();

        assert!(built.document.contains("<html lang=\"ar\" dir=\"rtl\">"));
    }
}
