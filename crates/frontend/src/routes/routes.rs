//! Tabla de rutas de la aplicación. Las pantallas de autenticación son
//! públicas; todo lo demás cuelga del shell protegido.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::asistencia::ui::AsistenciaList;
use crate::domain::cargo::ui::{CargoFormCreate, CargoFormEdit, CargoFormView, CargoList};
use crate::domain::estado_civil::ui::{
    EstadoCivilFormCreate, EstadoCivilFormEdit, EstadoCivilFormView, EstadoCivilList,
};
use crate::domain::genero::ui::{GeneroFormCreate, GeneroFormEdit, GeneroFormView, GeneroList};
use crate::domain::planilla_mensual::ui::PlanillaMensualList;
use crate::domain::sistema_pension::ui::{
    SistemaPensionFormCreate, SistemaPensionFormEdit, SistemaPensionFormView, SistemaPensionList,
};
use crate::domain::situacion_trabajador::ui::{
    SituacionTrabajadorFormCreate, SituacionTrabajadorFormEdit, SituacionTrabajadorFormView,
    SituacionTrabajadorList,
};
use crate::domain::tipo_documento::ui::{
    TipoDocumentoFormCreate, TipoDocumentoFormEdit, TipoDocumentoFormView, TipoDocumentoList,
};
use crate::domain::trabajador::ui::{
    TrabajadorFormCreate, TrabajadorFormEdit, TrabajadorFormView, TrabajadorList,
};
use crate::layout::main_menu::MainMenuPage;
use crate::layout::shell::ProtectedShell;
use crate::shared::app_context::LoadingOverlay;
use crate::shared::notifications::NotificationHost;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use crate::system::pages::unauthorized::UnauthorizedPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NotificationHost />
            <LoadingOverlay />
            // Cualquier ruta desconocida cae al login, como el comodín
            // original.
            <Routes fallback=|| view! { <Redirect path="/auth/login" /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/auth/login" /> } />
                <Route path=path!("/auth/login") view=LoginPage />
                <Route path=path!("/auth/register") view=RegisterPage />
                <Route path=path!("/unauthorized") view=UnauthorizedPage />

                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("/main-menu") view=MainMenuPage />

                    <Route path=path!("/cargo") view=CargoList />
                    <Route path=path!("/cargo/create") view=CargoFormCreate />
                    <Route path=path!("/cargo/edit/:id") view=CargoFormEdit />
                    <Route path=path!("/cargo/view/:id") view=CargoFormView />

                    <Route path=path!("/genero") view=GeneroList />
                    <Route path=path!("/genero/create") view=GeneroFormCreate />
                    <Route path=path!("/genero/edit/:id") view=GeneroFormEdit />
                    <Route path=path!("/genero/view/:id") view=GeneroFormView />

                    <Route path=path!("/estado-civil") view=EstadoCivilList />
                    <Route path=path!("/estado-civil/create") view=EstadoCivilFormCreate />
                    <Route path=path!("/estado-civil/edit/:id") view=EstadoCivilFormEdit />
                    <Route path=path!("/estado-civil/view/:id") view=EstadoCivilFormView />

                    <Route path=path!("/sistema-pension") view=SistemaPensionList />
                    <Route path=path!("/sistema-pension/create") view=SistemaPensionFormCreate />
                    <Route path=path!("/sistema-pension/edit/:id") view=SistemaPensionFormEdit />
                    <Route path=path!("/sistema-pension/view/:id") view=SistemaPensionFormView />

                    <Route path=path!("/tipo-documento") view=TipoDocumentoList />
                    <Route path=path!("/tipo-documento/create") view=TipoDocumentoFormCreate />
                    <Route path=path!("/tipo-documento/edit/:id") view=TipoDocumentoFormEdit />
                    <Route path=path!("/tipo-documento/view/:id") view=TipoDocumentoFormView />

                    <Route
                        path=path!("/situacion-trabajador")
                        view=SituacionTrabajadorList
                    />
                    <Route
                        path=path!("/situacion-trabajador/create")
                        view=SituacionTrabajadorFormCreate
                    />
                    <Route
                        path=path!("/situacion-trabajador/edit/:id")
                        view=SituacionTrabajadorFormEdit
                    />
                    <Route
                        path=path!("/situacion-trabajador/view/:id")
                        view=SituacionTrabajadorFormView
                    />

                    <Route path=path!("/trabajador") view=TrabajadorList />
                    <Route path=path!("/trabajador/create") view=TrabajadorFormCreate />
                    <Route path=path!("/trabajador/edit/:id") view=TrabajadorFormEdit />
                    <Route path=path!("/trabajador/view/:id") view=TrabajadorFormView />

                    <Route path=path!("/asistencia") view=AsistenciaList />
                    <Route path=path!("/planilla-mensual") view=PlanillaMensualList />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
