use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::context::use_auth;
use contracts::system::auth::User;

/// Decisión pura del guard por roles: sin roles requeridos pasa cualquier
/// usuario autenticado; con roles, debe haber intersección.
pub fn role_allows(user: Option<&User>, required: &[String]) -> bool {
    match user {
        None => false,
        Some(_) if required.is_empty() => true,
        Some(user) => user.has_any_role(required),
    }
}

/// Bloquea la navegación a contenido protegido: sin sesión redirige a
/// `/auth/login` antes de montar el componente destino.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated() {
            navigate("/auth/login", Default::default());
        }
    });

    view! {
        <Show when=move || auth.is_authenticated() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Variante con chequeo de roles; sin pertenencia redirige a `/unauthorized`.
#[component]
pub fn RequireRole(roles: Vec<String>, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let roles = StoredValue::new(roles);

    let allowed = move || {
        let user = auth.current_user();
        roles.with_value(|r| role_allows(user.as_ref(), r))
    };

    Effect::new(move |_| {
        if !auth.is_authenticated() {
            navigate("/auth/login", Default::default());
        } else if !allowed() {
            navigate("/unauthorized", Default::default());
        }
    });

    view! {
        <Show when=allowed fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(roles: &[&str]) -> User {
        User {
            id: Some(1),
            username: "ana".into(),
            email: "ana@empresa.com".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_sin_usuario_siempre_niega() {
        assert!(!role_allows(None, &[]));
        assert!(!role_allows(None, &["ROLE_ADMIN".into()]));
    }

    #[test]
    fn test_sin_roles_requeridos_pasa_autenticado() {
        let u = usuario(&["ROLE_USER"]);
        assert!(role_allows(Some(&u), &[]));
    }

    #[test]
    fn test_interseccion_de_roles() {
        let u = usuario(&["ROLE_USER"]);
        assert!(role_allows(Some(&u), &["ROLE_ADMIN".into(), "ROLE_USER".into()]));
        assert!(!role_allows(Some(&u), &["ROLE_ADMIN".into()]));
    }
}
