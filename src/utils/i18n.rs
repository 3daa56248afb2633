// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Errores de validación
            translations.insert("campo_requerido", "This field is required");
            translations.insert("referencia_solo_digitos", "Reference must contain only digits");
            translations.insert("documento_solo_digitos", "Document number must contain only digits");
            translations.insert("telefono_invalido", "Phone must be + followed by 8 to 15 digits");
            translations.insert("email_invalido", "Invalid email address");
            translations.insert("edad_minima_registro", "You must be at least 13 years old to register");
            translations.insert("edad_minima_perfil", "You must be at least 14 years old");
            translations.insert("fecha_invalida", "Invalid date");
            translations.insert("password_corta", "Password must be at least 8 characters");
            translations.insert("password_mayuscula", "Password must contain an uppercase letter");
            translations.insert("password_minuscula", "Password must contain a lowercase letter");
            translations.insert("password_digito", "Password must contain a digit");
            translations.insert("password_simbolo", "Password must contain a symbol");
            translations.insert("passwords_no_coinciden", "Passwords do not match");
            translations.insert("metodo_envio_requerido", "Choose a shipping method");
            translations.insert("sucursal_direccion_requerida", "Choose a branch or delivery address");
            translations.insert("metodo_pago_requerido", "Choose a payment method");

            // Checkout
            translations.insert("envio", "Shipping");
            translations.insert("pago", "Payment");
            translations.insert("confirmacion", "Confirmation");
            translations.insert("retiro_sucursal", "Pickup at branch");
            translations.insert("envio_domicilio", "Home delivery");
            translations.insert("efectivo", "Cash");
            translations.insert("pos", "POS on delivery");
            translations.insert("transferencia", "Bank transfer");
            translations.insert("pago_movil", "Mobile payment");
            translations.insert("continuar", "Continue");
            translations.insert("confirmar_pedido", "Confirm order");
            translations.insert("pedido_creado", "Order created successfully");
            translations.insert("carrito_vacio", "Your cart is empty");
            translations.insert("error_generico", "An error occurred. Please try again.");

            // Estados de pedido
            translations.insert("esperando_aprobacion", "Waiting for approval");
            translations.insert("esperando_aprobacion_pago", "Waiting for payment approval");
            translations.insert("pedido_rechazado", "Order canceled");
            translations.insert("pedido_completado", "Order completed");
            translations.insert("listo_para_retirar", "Ready for pickup");
            translations.insert("en_camino", "On the way");
            translations.insert("entregado", "Delivered");
            translations.insert("estado_actualizado", "Status updated");

            // App / navegación
            translations.insert("iniciar_sesion", "Log in");
            translations.insert("registrarse", "Sign up");
            translations.insert("cerrar_sesion", "Log out");
            translations.insert("buscar_productos", "Search products...");
            translations.insert("todas_categorias", "All categories");
            translations.insert("agregar_carrito", "Add to cart");
            translations.insert("mis_pedidos", "My orders");
            translations.insert("mi_perfil", "My profile");
            translations.insert("notificaciones", "Notifications");
            translations.insert("cargando", "Loading...");
            translations.insert("sin_notificaciones", "No notifications");
            translations.insert("requiere_receta", "Prescription required");

            // Formularios
            translations.insert("email", "Email");
            translations.insert("contrasena", "Password");
            translations.insert("confirmar_contrasena", "Confirm password");
            translations.insert("contrasena_actual", "Current password");
            translations.insert("contrasena_nueva", "New password");
            translations.insert("cambiar_contrasena", "Change password");
            translations.insert("nombre", "First name");
            translations.insert("apellido", "Last name");
            translations.insert("telefono", "Phone");
            translations.insert("fecha_nacimiento", "Birth date");
            translations.insert("guardar", "Save");
            translations.insert("sucursal", "Branch");
            translations.insert("direccion", "Delivery address");
            translations.insert("metodo_pago", "Payment method");
            translations.insert("referencia", "Reference number");
            translations.insert("documento", "Document ID");
            translations.insert("total", "Total");
            translations.insert("quitar", "Remove");
            translations.insert("finalizar_compra", "Checkout");
            translations.insert("numero_pedido", "Order number");
            translations.insert("sin_pedidos", "You have no orders yet");
            translations.insert("seguir_comprando", "Continue shopping");
        }
        _ => {
            // ES (por defecto)
            // Errores de validación
            translations.insert("campo_requerido", "Este campo es obligatorio");
            translations.insert("referencia_solo_digitos", "La referencia debe contener solo dígitos");
            translations.insert("documento_solo_digitos", "El documento debe contener solo dígitos");
            translations.insert("telefono_invalido", "El teléfono debe ser + seguido de 8 a 15 dígitos");
            translations.insert("email_invalido", "Correo electrónico inválido");
            translations.insert("edad_minima_registro", "Debes tener al menos 13 años para registrarte");
            translations.insert("edad_minima_perfil", "Debes tener al menos 14 años");
            translations.insert("fecha_invalida", "Fecha inválida");
            translations.insert("password_corta", "La contraseña debe tener al menos 8 caracteres");
            translations.insert("password_mayuscula", "La contraseña debe contener una mayúscula");
            translations.insert("password_minuscula", "La contraseña debe contener una minúscula");
            translations.insert("password_digito", "La contraseña debe contener un dígito");
            translations.insert("password_simbolo", "La contraseña debe contener un símbolo");
            translations.insert("passwords_no_coinciden", "Las contraseñas no coinciden");
            translations.insert("metodo_envio_requerido", "Elige un método de envío");
            translations.insert("sucursal_direccion_requerida", "Elige una sucursal o dirección de entrega");
            translations.insert("metodo_pago_requerido", "Elige un método de pago");

            // Checkout
            translations.insert("envio", "Envío");
            translations.insert("pago", "Pago");
            translations.insert("confirmacion", "Confirmación");
            translations.insert("retiro_sucursal", "Retiro en sucursal");
            translations.insert("envio_domicilio", "Envío a domicilio");
            translations.insert("efectivo", "Efectivo");
            translations.insert("pos", "POS contra entrega");
            translations.insert("transferencia", "Transferencia bancaria");
            translations.insert("pago_movil", "Pago móvil");
            translations.insert("continuar", "Continuar");
            translations.insert("confirmar_pedido", "Confirmar pedido");
            translations.insert("pedido_creado", "Pedido creado exitosamente");
            translations.insert("carrito_vacio", "Tu carrito está vacío");
            translations.insert("error_generico", "Ocurrió un error. Por favor intenta de nuevo.");

            // Estados de pedido
            translations.insert("esperando_aprobacion", "Esperando aprobación");
            translations.insert("esperando_aprobacion_pago", "Esperando aprobación del pago");
            translations.insert("pedido_rechazado", "Pedido cancelado");
            translations.insert("pedido_completado", "Pedido completado");
            translations.insert("listo_para_retirar", "Listo para retirar");
            translations.insert("en_camino", "En camino");
            translations.insert("entregado", "Entregado");
            translations.insert("estado_actualizado", "Estado actualizado");

            // App / navegación
            translations.insert("iniciar_sesion", "Iniciar sesión");
            translations.insert("registrarse", "Registrarse");
            translations.insert("cerrar_sesion", "Cerrar sesión");
            translations.insert("buscar_productos", "Buscar productos...");
            translations.insert("todas_categorias", "Todas las categorías");
            translations.insert("agregar_carrito", "Agregar al carrito");
            translations.insert("mis_pedidos", "Mis pedidos");
            translations.insert("mi_perfil", "Mi perfil");
            translations.insert("notificaciones", "Notificaciones");
            translations.insert("cargando", "Cargando...");
            translations.insert("sin_notificaciones", "No hay notificaciones");
            translations.insert("requiere_receta", "Requiere receta médica");

            // Formularios
            translations.insert("email", "Correo electrónico");
            translations.insert("contrasena", "Contraseña");
            translations.insert("confirmar_contrasena", "Confirmar contraseña");
            translations.insert("contrasena_actual", "Contraseña actual");
            translations.insert("contrasena_nueva", "Contraseña nueva");
            translations.insert("cambiar_contrasena", "Cambiar contraseña");
            translations.insert("nombre", "Nombre");
            translations.insert("apellido", "Apellido");
            translations.insert("telefono", "Teléfono");
            translations.insert("fecha_nacimiento", "Fecha de nacimiento");
            translations.insert("guardar", "Guardar");
            translations.insert("sucursal", "Sucursal");
            translations.insert("direccion", "Dirección de entrega");
            translations.insert("metodo_pago", "Método de pago");
            translations.insert("referencia", "Número de referencia");
            translations.insert("documento", "Documento de identidad");
            translations.insert("total", "Total");
            translations.insert("quitar", "Quitar");
            translations.insert("finalizar_compra", "Finalizar compra");
            translations.insert("numero_pedido", "Número de pedido");
            translations.insert("sin_pedidos", "Todavía no tienes pedidos");
            translations.insert("seguir_comprando", "Seguir comprando");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("ES" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traduccion_es_por_defecto() {
        assert_eq!(t("passwords_no_coinciden", "ES"), "Las contraseñas no coinciden");
        assert_eq!(t("passwords_no_coinciden", "EN"), "Passwords do not match");
    }

    #[test]
    fn test_fallback_devuelve_clave() {
        assert_eq!(t("clave_inexistente", "ES"), "clave_inexistente");
    }
}
