//! Built-in route and tariff catalog (2025 tariff table)

use flete_domain::model::Route;
use flete_domain::repository::RouteRepository;
use flete_types::Error;

/// 2025 contracted tariff per route and truck class, in pesos.
///
/// Columns: id, code, name, tariff 25 m³, tariff 37 m³, tariff 45 m³.
/// `None` marks classes that are not contracted for the route.
#[rustfmt::skip]
static ROUTE_TABLE: &[(u32, &str, &str, Option<f64>, Option<f64>, Option<f64>)] = &[
    (1,  "RUTA 01", "URBANO (SIBATE a Calle 26) (1 a 6 Clientes)",                  Some(272967.0),  Some(318462.0),  Some(333626.0)),
    (2,  "RUTA 02", "URBANO NORTE SUBA (Calle 26/ a calle 200) (1 a 6 Clientes)",   Some(333626.0),  Some(363956.0),  Some(394286.0)),
    (3,  "RUTA 03", "PAQUETERA (ENTREGA CLIENTE) (8 a 12 Clientes)",                Some(480220.0),  Some(492857.0),  Some(505495.0)),
    (4,  "RUTA 04", "PLATAFORMA ALKOSTO (PAGA DESCARGUE)",                          Some(514341.0),  Some(528242.0),  Some(552253.0)),
    (5,  "RUTA 05", "PLATAFORMA SODIMAC EL ZOL",                                    Some(568681.0),  Some(568681.0),  Some(568681.0)),
    (6,  "RUTA 06", "FUNZA - MOSQUERA - MADRID / (incluye entregas en Bogotá)",     Some(435989.0),  Some(465055.0),  Some(494121.0)),
    (7,  "RUTA 07", "MOSQUERA - MADRID - FACATATIVA",                               Some(514341.0),  Some(528242.0),  Some(528242.0)),
    (8,  "RUTA 08", "ALBAN - SASAIMA - VILLETA - GUADUAS - HONDA",                  Some(970659.0),  Some(997253.0),  Some(997253.0)),
    (9,  "RUTA 09", "SIBERIA - TENJO - EL ROSAL",                                   Some(421456.0),  Some(450522.0),  Some(450522.0)),
    (10, "RUTA 10", "SAN FRANCISCO - LA VEGA - SUPATA - NOCAIMA - VILLETA",         Some(970659.0),  Some(997253.0),  Some(997253.0)),
    (11, "RUTA 11", "PTO SALGAR - LA DORADA - HONDA - MARIQUITA - ARMERO - LIBANO", Some(1692308.0), Some(1692936.0), Some(1752530.0)),
    (12, "RUTA 12", "MARIQUITA - FRESNO - MANZANARES - MANIZALEZ",                  Some(1813187.0), Some(1882813.0), Some(1956791.0)),
    (13, "RUTA 13", "COTA - CHIA - CAJICA - ZIPAQUIRA O SUBACHOQUE",                Some(491978.0),  Some(505275.0),  Some(505275.0)),
    (14, "RUTA 14", "SOPO - TOCANCIPA - GACHANCIPA - CHOCONTA",                     Some(543956.0),  Some(543956.0),  Some(543956.0)),
    (15, "RUTA 15", "UBATE - CHIQUINQUIRA",                                         Some(725275.0),  Some(725275.0),  Some(725275.0)),
    (16, "RUTA 16", "SOPO - GUASCA - LA CALERA",                                    Some(664835.0),  Some(664835.0),  Some(664835.0)),
    (17, "RUTA 17", "PUENTE NACIONAL - BARBOSA",                                    Some(967033.0),  Some(1027473.0), Some(1027473.0)),
    (18, "RUTA 18", "TUNJA - PAIPA - DUITAMA - SOGAMOSO O MONIQUIRA",               Some(1223297.0), Some(1245538.0), Some(1245538.0)),
    (19, "RUTA 19", "VILLA DE LEYVA - RAQUIRA",                                     Some(1340791.0), Some(1362308.0), Some(1362308.0)),
    (20, "RUTA 20", "TUNJA - DUITAMA - SOGAMOSO - SOATA",                           Some(1390110.0), Some(1668132.0), Some(1668132.0)),
    (21, "RUTA 21", "SOGAMOSO - SOATA - CAPITANEJO",                                Some(1668132.0), Some(1876648.0), Some(1876648.0)),
    (22, "RUTA 22", "GARAGOA - MONTEREY - AGUAZUL - YOPAL",                         Some(2017582.0), Some(2136264.0), Some(2136264.0)),
    (23, "RUTA 23", "YOPAL - MANI - PORE - PAZ DE ARIPORO",                         Some(2136264.0), Some(2254945.0), Some(2254945.0)),
    (24, "RUTA 24", "VILLAVICENCIO",                                                Some(1251099.0), Some(1390110.0), Some(1390110.0)),
    (25, "RUTA 25", "VILLAVICENCIO - RESTREPO - CUMARAL - VILLANUEVA",              Some(1598626.0), Some(1807143.0), Some(1807143.0)),
    (26, "RUTA 26", "VILLAVICENCIO - ACACIAS - CASTILLA - SAN CARLOS DE GUAROA",    Some(1598626.0), Some(1807143.0), Some(1807143.0)),
    (27, "RUTA 27", "VILLAVICENCIO - SAN MARTIN - GRANADA - SAN JUAN DE ARAMA",     Some(1807143.0), Some(1807143.0), Some(1807143.0)),
    (28, "RUTA 28", "VILLAVICENCIO - GRANADA- SAN JOSE DE GUAVIARE",                Some(2136264.0), Some(2254945.0), Some(2254945.0)),
    (29, "RUTA 29", "VILLAVICENCIO - PUERTO LOPEZ - PUERTO GAITAN",                 Some(1807143.0), Some(1807143.0), Some(1946154.0)),
    (30, "RUTA 30", "SILVANIA - FUSAGASUGA",                                        Some(514341.0),  Some(528242.0),  Some(528242.0)),
    (31, "RUTA 31", "LA MESA - APULO - ANAPOIMA - TOCAIMA - AGUA DE DIOS - RICAURTE", Some(1014780.0), Some(1014780.0), Some(1014780.0)),
    (32, "RUTA 32", "GIRARDOT - MELGAR - ESPINAL- IBAGUE",                          Some(1251099.0), Some(1329670.0), Some(1329670.0)),
    (33, "RUTA 33", "IBAGUE - ARMENIA",                                             Some(1682033.0), Some(1682033.0), Some(1682033.0)),
    (34, "RUTA 34", "CALI - PUERTO TEJADA",                                         Some(1840385.0), Some(1967308.0), Some(2094231.0)),
    (35, "RUTA 35", "NEIVA",                                                        Some(1662088.0), Some(1662088.0), Some(1662088.0)),
    (36, "RUTA 36", "NEIVA - ORTEGA - CHAPARRAL - GUAMO",                           Some(1876648.0), Some(1876648.0), Some(1876648.0)),
    (37, "RUTA 37", "NEIVA - GARZON",                                               Some(1904360.0), Some(2038470.0), Some(2038470.0)),
    (38, "RUTA 38", "NEIVA - GARZON - PITALITO",                                    Some(2118462.0), Some(2243077.0), Some(2243077.0)),
    (39, "RUTA 39", "NEIVA - GARZON - LA PLATA - PITALITO",                         Some(2219341.0), Some(2349890.0), Some(2349890.0)),
    (40, "RUTA 40", "NEIVA - GARZON - PITALITO - FLORENCIA",                        Some(2480440.0), Some(2492308.0), Some(2492308.0)),
    (41, "RUTA 41", "NEIVA - GARZON - PITALITO - FLORENCIA - EL DONCELLO",          Some(2610989.0), Some(2666769.0), Some(2689319.0)),
    (42, "RUTA 42", "PITALITO - FLORENCIA - CARTAGENA DEL CHAIRA",                  Some(2967033.0), Some(2967033.0), Some(2967033.0)),
    (43, "RUTA 43", "DUITAMA - CAPITANEJO - MALAGA",                                Some(1538462.0), Some(1703297.0), Some(1758242.0)),
    (44, "RUTA 44", "TUNJA - DUITAMA - SAN GIL - BUCARAMANGA",                      Some(1648352.0), Some(1703297.0), Some(1758242.0)),
    (45, "RUTA 45", "BUCARAMANGA - SAN GIL - FLORIDABLANCA",                        Some(1483516.0), Some(1538462.0), Some(1593407.0)),
    (46, "RUTA 46", "CUCUTA",                                                       Some(2197802.0), Some(2307692.0), Some(2417582.0)),
    (47, "RUTA 47", "BUCARAMANGA - CUCUTA",                                         Some(2417582.0), Some(2527473.0), Some(2637363.0)),
    (48, "RUTA 48", "VALLEDUPAR",                                                   Some(2307692.0), Some(2417582.0), Some(2527473.0)),
    (49, "RUTA 49", "BARRANQUILLA",                                                 Some(3021978.0), Some(3131868.0), Some(3956044.0)),
    (50, "RUTA 50", "SANTA MARTA",                                                  Some(2747253.0), Some(2857143.0), Some(3681319.0)),
    (51, "RUTA 51", "CARTAGENA",                                                    Some(3076923.0), Some(3186813.0), Some(4065934.0)),
    (52, "RUTA 52", "URIBIA - MAICAO - RIOHACHA",                                   Some(2989011.0), Some(3087912.0), Some(3934066.0)),
    (53, "RUTA 53", "VILLAVICENCIO - LEJANIAS - VISTAHERMOSA",                      Some(1714286.0), Some(1747253.0), Some(1802198.0)),
    (54, "RUTA 54", "EL DONCELLLO - SAN VICENTE DEL CAGUAN",                        None,            None,            Some(1978022.0)),
    (55, "SOACHA - GUARNE (ANT)", "SOACHA - GUARNE (ANT)",                          Some(1593407.0), Some(1703297.0), Some(1813187.0)),
    (56, "SOACHA - PEREIRA", "SOACHA - PEREIRA",                                    Some(1483516.0), Some(1593407.0), Some(1758242.0)),
    (57, "MANIZALES - SOACHA", "MANIZALES - SOACHA",                                Some(0.0),       Some(0.0),       Some(0.0)),
];

/// Built-in route catalog
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<Route>,
}

impl RouteCatalog {
    /// Catalog backed by the built-in 2025 tariff table
    pub fn builtin() -> Self {
        let routes = ROUTE_TABLE
            .iter()
            .map(
                |&(id, code, name, tariff_25m3, tariff_37m3, tariff_45m3)| Route {
                    id,
                    code: code.to_string(),
                    name: name.to_string(),
                    tariff_25m3,
                    tariff_37m3,
                    tariff_45m3,
                },
            )
            .collect();
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get_route(&self, id: u32) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn count(&self) -> usize {
        self.routes.len()
    }
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RouteRepository for RouteCatalog {
    fn find_all(&self) -> Result<Vec<Route>, Error> {
        Ok(self.routes.clone())
    }

    fn find_by_id(&self, id: u32) -> Result<Option<Route>, Error> {
        Ok(self.get_route(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_size() {
        let catalog = RouteCatalog::builtin();
        assert_eq!(catalog.count(), 57);
    }

    #[test]
    fn test_get_route() {
        let catalog = RouteCatalog::builtin();
        let route = catalog.get_route(1).unwrap();
        assert_eq!(route.code, "RUTA 01");
        assert_eq!(route.tariff_25m3, Some(272967.0));

        assert!(catalog.get_route(99).is_none());
    }

    #[test]
    fn test_get_tariff_via_repository() {
        let catalog = RouteCatalog::builtin();
        let tariff = catalog.get_tariff(49, 45.0).unwrap();
        assert!((tariff - 3956044.0).abs() < 1e-6);
    }

    #[test]
    fn test_get_tariff_unknown_route() {
        let catalog = RouteCatalog::builtin();
        assert!(matches!(
            catalog.get_tariff(99, 25.0),
            Err(Error::RouteNotFound(99))
        ));
    }

    #[test]
    fn test_get_tariff_uncontracted_class() {
        let catalog = RouteCatalog::builtin();
        // Route 54 only runs with the 45 m³ truck
        assert!(catalog.get_tariff(54, 25.0).is_err());
        assert!(catalog.get_tariff(54, 45.0).is_ok());
        // Arbitrary capacities never fall back to a contracted class
        assert!(catalog.get_tariff(1, 30.0).is_err());
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let catalog = RouteCatalog::builtin();
        for pair in catalog.routes().windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }
}
