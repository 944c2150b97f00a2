//! Display language and the label table.
//!
//! Labels are looked up by key; a key missing from the table is shown as
//! is, so a forgotten translation is visible instead of blank.

use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Es];

    /// Code sent to the backend as `lang`.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    /// Name of the language in itself, for the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }
}

const STORAGE_KEY: &str = "lang";

pub fn get_stored_lang() -> Option<Lang> {
    let storage = window()?.local_storage().ok()??;
    let code = storage.get_item(STORAGE_KEY).ok()??;
    Lang::from_code(&code)
}

pub fn store_lang(lang: Lang) {
    if let Some(window) = window()
        && let Ok(Some(storage)) = window.local_storage()
    {
        let _ = storage.set_item(STORAGE_KEY, lang.code());
    }
}

/// `(key, English, Spanish)`
static LABELS: &[(&str, &str, &str)] = &[
    ("app.title", "School administration", "Administración escolar"),
    ("app.language", "Language", "Idioma"),
    ("app.dismiss", "Dismiss", "Cerrar"),
    ("not_found.title", "404", "404"),
    ("not_found.body", "Page not found", "Página no encontrada"),
    // list chrome
    ("list.loading", "Loading...", "Cargando..."),
    ("list.refreshing", "Refreshing...", "Actualizando..."),
    ("list.empty", "No records found", "No se encontraron registros"),
    ("list.fetch_failed", "Failed to fetch data", "Error al obtener los datos"),
    ("list.previous", "Previous", "Anterior"),
    ("list.next", "Next", "Siguiente"),
    (
        "list.showing",
        "Showing {start}-{end} of {total}",
        "Mostrando {start}-{end} de {total}",
    ),
    ("list.page", "Page {page} of {pages}", "Página {page} de {pages}"),
    ("list.rows_per_page", "Rows per page", "Filas por página"),
    ("list.yes", "Yes", "Sí"),
    ("list.no", "No", "No"),
    // filters
    ("filters.apply", "Apply filters", "Aplicar filtros"),
    ("filters.clear", "Clear", "Limpiar"),
    ("filters.active", "{count} active", "{count} activos"),
    ("filters.any", "Any", "Todos"),
    ("filters.from", "From", "Desde"),
    ("filters.to", "To", "Hasta"),
    ("filters.search", "Search", "Buscar"),
    // export
    ("export.button", "Export CSV", "Exportar CSV"),
    ("export.busy", "Exporting...", "Exportando..."),
    (
        "export.failed",
        "The export could not be completed",
        "No se pudo completar la exportación",
    ),
    // navigation
    ("nav.students", "Students", "Estudiantes"),
    ("nav.teachers", "Teachers", "Profesores"),
    ("nav.users", "Users", "Usuarios"),
    ("nav.classes", "Classes", "Clases"),
    ("nav.payments", "Payments", "Pagos"),
    ("nav.payment_requests", "Payment requests", "Solicitudes de pago"),
    ("nav.coffee_sales", "Coffee shop sales", "Ventas de cafetería"),
    ("nav.menu_items", "Menu", "Menú"),
    ("nav.balance_recharges", "Balance recharges", "Recargas de saldo"),
    // students
    ("student.full_name", "Name", "Nombre"),
    ("student.identity_document", "ID document", "Documento de identidad"),
    ("student.class_name", "Class", "Clase"),
    ("student.grade", "Grade", "Grado"),
    ("student.balance", "Balance", "Saldo"),
    ("student.enabled", "Active", "Activo"),
    ("student.created_at", "Registered", "Registrado"),
    // teachers
    ("teacher.full_name", "Name", "Nombre"),
    ("teacher.email", "Email", "Correo"),
    ("teacher.phone", "Phone", "Teléfono"),
    ("teacher.enabled", "Active", "Activo"),
    // users
    ("user.username", "Username", "Usuario"),
    ("user.email", "Email", "Correo"),
    ("user.role", "Role", "Rol"),
    ("user.school_name", "School", "Escuela"),
    ("user.enabled", "Active", "Activo"),
    ("user.last_login_at", "Last login", "Último acceso"),
    // classes
    ("class.name", "Class", "Clase"),
    ("class.grade", "Grade", "Grado"),
    ("class.section", "Section", "Sección"),
    ("class.teacher_name", "Teacher", "Profesor"),
    ("class.student_count", "Students", "Estudiantes"),
    // payments
    ("payment.student_name", "Student", "Estudiante"),
    ("payment.concept", "Concept", "Concepto"),
    ("payment.amount", "Amount", "Monto"),
    ("payment.late_fee", "Late fee", "Recargo"),
    ("payment.status", "Status", "Estado"),
    ("payment.paid_at", "Paid", "Pagado"),
    // payment requests
    ("payment_request.concept", "Concept", "Concepto"),
    ("payment_request.amount", "Amount", "Monto"),
    ("payment_request.due_date", "Due date", "Vencimiento"),
    ("payment_request.recipients", "Recipients", "Destinatarios"),
    ("payment_request.paid_count", "Paid", "Pagados"),
    ("payment_request.status", "Status", "Estado"),
    // coffee shop sales
    ("coffee_sale.buyer_name", "Buyer", "Comprador"),
    ("coffee_sale.items", "Items", "Productos"),
    ("coffee_sale.total", "Total", "Total"),
    ("coffee_sale.payment_method", "Payment method", "Método de pago"),
    ("coffee_sale.sold_at", "Date", "Fecha"),
    // menu
    ("menu_item.code", "Code", "Código"),
    ("menu_item.name", "Name", "Nombre"),
    ("menu_item.price", "Price", "Precio"),
    ("menu_item.category", "Category", "Categoría"),
    ("menu_item.available", "Available", "Disponible"),
    // balance recharges
    ("recharge.student_name", "Student", "Estudiante"),
    ("recharge.amount", "Amount", "Monto"),
    ("recharge.method", "Method", "Método"),
    ("recharge.reference", "Reference", "Referencia"),
    ("recharge.created_at", "Date", "Fecha"),
];

pub fn translate(lang: Lang, key: &str) -> String {
    LABELS
        .iter()
        .find(|(candidate, _, _)| *candidate == key)
        .map(|&(_, en, es)| match lang {
            Lang::En => en,
            Lang::Es => es,
        })
        .unwrap_or(key)
        .to_string()
}

/// Translate and fill `{name}` placeholders.
pub fn translate_with(
    lang: Lang,
    key: &str,
    args: &[(&str, String)],
) -> String {
    args.iter()
        .fold(translate(lang, key), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}
